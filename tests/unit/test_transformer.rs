use search_recreate::core::transformer::{
    generate_module, transform, transform_with, SearchModuleRequest, TransformError,
    TransformOptions, UnterminatedFragment,
};
use search_recreate::core::types::InputField;

const EXAMPLE_SCRIPT: &str = "var s = search.create({type:'foo'}); s.run().each(...)";

fn example_request() -> SearchModuleRequest {
    SearchModuleRequest::new(EXAMPLE_SCRIPT, "My Search", "42", "line one\nline two")
}

#[test]
fn test_example_script_output() {
    let module = transform(&example_request()).unwrap();
    let lines: Vec<&str> = module.source.lines().collect();

    assert!(lines.contains(&"      // line one"));
    assert!(lines.contains(&"      // line two"));
    assert!(module.source.contains("s.id=\"customsearch42\";"));
    assert!(module.source.contains("s.title=\"My Search\";"));

    let fragment_at = module.source.find("var s = search.create({type:'foo'})").unwrap();
    let id_at = module.source.find(".id=").unwrap();
    assert!(fragment_at < id_at);
}

#[test]
fn test_example_script_exact_output() {
    let expected = "require(['N/search'], function(search) {
   try {
 
      // Description:
      // line one
      // line two

      var s = search.create({type:'foo'}); s.run().each(...)
      s.id=\"customsearch42\";
      s.title=\"My Search\";
      var newSearchId = s.save();
 
      console.log('Search recreated successfully');
 
   } catch (e) {
      console.error(e.message);
   }
})";
    assert_eq!(transform(&example_request()).unwrap().source, expected);
}

#[test]
fn test_transform_is_deterministic() {
    let first = transform(&example_request()).unwrap();
    let second = transform(&example_request()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_inputs_are_trimmed() {
    let padded = SearchModuleRequest::new(
        format!("\n\n  {}  \n", EXAMPLE_SCRIPT),
        "  My Search\t",
        " 42 ",
        "\nline one\nline two\n\n",
    );
    assert_eq!(
        transform(&padded).unwrap().source,
        transform(&example_request()).unwrap().source
    );
}

#[test]
fn test_each_blank_field_fails_with_missing_field() {
    let cases = [
        (SearchModuleRequest::new(" ", "n", "1", "d"), InputField::Script),
        (SearchModuleRequest::new(EXAMPLE_SCRIPT, "", "1", "d"), InputField::Name),
        (SearchModuleRequest::new(EXAMPLE_SCRIPT, "n", "\t", "d"), InputField::IdSuffix),
        (SearchModuleRequest::new(EXAMPLE_SCRIPT, "n", "1", "\n\n"), InputField::Description),
    ];

    for (request, field) in cases {
        match transform(&request) {
            Err(TransformError::MissingField { fields }) => assert_eq!(fields, vec![field]),
            other => panic!("expected missing {} to fail, got {:?}", field, other),
        }
    }
}

#[test]
fn test_missing_field_checked_before_anchors() {
    let request = SearchModuleRequest::new("no anchors here", "", "1", "d");
    assert!(matches!(
        transform(&request),
        Err(TransformError::MissingField { .. })
    ));
}

#[test]
fn test_missing_declaration_anchor() {
    let request = SearchModuleRequest::new("s = search.create({});", "n", "1", "d");
    assert_eq!(
        transform(&request).unwrap_err(),
        TransformError::MissingSearchVariable
    );
}

#[test]
fn test_missing_assignment_anchor() {
    let request = SearchModuleRequest::new("var s = something.else({});", "n", "1", "d");
    assert_eq!(
        transform(&request).unwrap_err(),
        TransformError::MissingSearchVariable
    );
}

#[test]
fn test_search_id_is_literal_concatenation() {
    for suffix in ["42", "_orders", "My Id", "\"quoted\""] {
        let request = SearchModuleRequest::new(EXAMPLE_SCRIPT, "n", suffix, "d");
        let module = transform(&request).unwrap();
        assert_eq!(module.search_id, format!("customsearch{}", suffix));
    }
}

#[test]
fn test_description_line_count_and_order() {
    let description = "alpha\nbeta\n\ngamma\ndelta";
    let request = SearchModuleRequest::new(EXAMPLE_SCRIPT, "n", "1", description);
    let module = transform(&request).unwrap();

    let comments: Vec<&str> = module
        .source
        .lines()
        .filter(|line| line.starts_with("      // "))
        .collect();
    assert_eq!(
        comments,
        vec![
            "      // Description:",
            "      // alpha",
            "      // beta",
            "      // ",
            "      // gamma",
            "      // delta",
        ]
    );
}

#[test]
fn test_result_count_block_is_removed() {
    let script = "var mySearch = search.create({type:'item'});\nvar searchResultCount = mySearch.runPaged().count;\nmySearch.run().each(function(r){ return true; });\n/*\nmySearch.id=\"customsearch1\";\n*/";
    let module = transform(&SearchModuleRequest::new(script, "Items", "_items", "d")).unwrap();
    assert_eq!(
        module.search_create_code,
        "var mySearch = search.create({type:'item'});"
    );
    assert!(!module.source.contains("searchResultCount"));
    assert!(!module.source.contains("customsearch1\""));
}

#[test]
fn test_unterminated_fragment_defaults_to_end_of_script() {
    let module = transform(&example_request()).unwrap();
    assert_eq!(module.search_create_code, EXAMPLE_SCRIPT);
}

#[test]
fn test_unterminated_fragment_policies() {
    let drop_last = TransformOptions {
        unterminated_fragment: UnterminatedFragment::DropLastChar,
    };
    let module = transform_with(&example_request(), &drop_last).unwrap();
    assert_eq!(
        module.search_create_code,
        "var s = search.create({type:'foo'}); s.run().each(..."
    );

    let reject = TransformOptions {
        unterminated_fragment: UnterminatedFragment::Reject,
    };
    assert_eq!(
        transform_with(&example_request(), &reject).unwrap_err(),
        TransformError::UnterminatedFragment
    );
}

#[test]
fn test_search_variable_is_not_validated_as_identifier() {
    let request = SearchModuleRequest::new("var 1st-search = search.create({}); /* */", "n", "1", "d");
    let module = transform(&request).unwrap();
    assert_eq!(module.search_variable, "1st-search");
    assert!(module.source.contains("      1st-search.id=\"customsearch1\";"));
}

#[test]
fn test_retransforming_output_fails_gracefully() {
    let first = transform(&example_request()).unwrap();
    let snapshot = first.source.clone();

    let again = SearchModuleRequest::new(first.source.clone(), "My Search", "42", "line one");
    let reject = TransformOptions {
        unterminated_fragment: UnterminatedFragment::Reject,
    };
    assert_eq!(
        transform_with(&again, &reject).unwrap_err(),
        TransformError::UnterminatedFragment
    );

    // The default policy wraps the whole previous body instead of failing.
    let nested = transform(&again).unwrap();
    assert_ne!(nested.source, snapshot);
    assert_eq!(first.source, snapshot);
}

#[test]
fn test_generate_module_returns_text() {
    let text = generate_module(EXAMPLE_SCRIPT, "My Search", "42", "line one\nline two").unwrap();
    assert_eq!(text, transform(&example_request()).unwrap().source);
}
