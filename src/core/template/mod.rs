//! Fixed SuiteScript module layout that wraps a recreated saved search.
//!
//! Output must match the legacy generator byte for byte, including the
//! separator lines that hold a single space.

/// Prefix NetSuite requires on every saved search script id.
pub const SEARCH_ID_PREFIX: &str = "customsearch";

/// Indent of description comments and body statements.
pub const BODY_INDENT: &str = "      ";

/// Indent of the `try`/`catch` scaffolding.
pub const TRY_INDENT: &str = "   ";

const DESCRIPTION_HEADER: &str = "Description:";

/// Values substituted into the module template.
#[derive(Debug, Clone, Copy)]
pub struct ModuleParts<'a> {
    pub description: &'a str,
    pub search_create_code: &'a str,
    pub search_variable: &'a str,
    pub search_id: &'a str,
    pub title: &'a str,
}

/// Build the full script id for a user supplied suffix.
pub fn search_id(id_suffix: &str) -> String {
    format!("{}{}", SEARCH_ID_PREFIX, id_suffix)
}

/// Render a description as `// ` comment lines under a `// Description:` header.
///
/// Every line, including the last, ends with a newline. Blank description
/// lines are kept as empty comments so paragraph breaks survive.
pub fn format_description(description: &str) -> String {
    let mut out = String::new();
    comment_line(&mut out, DESCRIPTION_HEADER);
    for line in description.lines() {
        comment_line(&mut out, line);
    }
    out
}

/// Assemble the module text.
pub fn render_module(parts: &ModuleParts<'_>) -> String {
    let mut out = String::with_capacity(
        256 + parts.description.len()
            + parts.search_create_code.len()
            + 3 * parts.search_variable.len(),
    );

    out.push_str("require(['N/search'], function(search) {\n");
    push_line(&mut out, TRY_INDENT, "try {");
    out.push_str(" \n");
    out.push_str(&format_description(parts.description));
    out.push('\n');

    push_line(&mut out, BODY_INDENT, parts.search_create_code);
    push_line(
        &mut out,
        BODY_INDENT,
        &format!("{}.id=\"{}\";", parts.search_variable, parts.search_id),
    );
    push_line(
        &mut out,
        BODY_INDENT,
        &format!("{}.title=\"{}\";", parts.search_variable, parts.title),
    );
    push_line(
        &mut out,
        BODY_INDENT,
        &format!("var newSearchId = {}.save();", parts.search_variable),
    );
    out.push_str(" \n");
    push_line(
        &mut out,
        BODY_INDENT,
        "console.log('Search recreated successfully');",
    );
    out.push_str(" \n");

    push_line(&mut out, TRY_INDENT, "} catch (e) {");
    push_line(&mut out, BODY_INDENT, "console.error(e.message);");
    push_line(&mut out, TRY_INDENT, "}");
    out.push_str("})");
    out
}

fn comment_line(out: &mut String, text: &str) {
    out.push_str(BODY_INDENT);
    out.push_str("// ");
    out.push_str(text);
    out.push('\n');
}

fn push_line(out: &mut String, indent: &str, text: &str) {
    out.push_str(indent);
    out.push_str(text);
    out.push('\n');
}
