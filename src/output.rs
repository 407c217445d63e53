//! Rendering of lookup results as extended JSON.

use {
    crate::{errors::LookupError, models::OutputFormat},
    mongodb::bson::{Bson, Document},
    serde_json::Value,
    std::io::Write,
};

fn to_json(document: Option<&Document>, format: OutputFormat) -> Value {
    let Some(document) = document else {
        return Value::Null;
    };

    let bson = Bson::Document(document.clone());
    match format {
        OutputFormat::Canonical => bson.into_canonical_extjson(),
        OutputFormat::Relaxed | OutputFormat::Compact => bson.into_relaxed_extjson(),
    }
}

/// Renders a result as extended JSON in the requested format.
///
/// `None` always renders as `null`.
pub fn render(document: Option<&Document>, format: OutputFormat) -> Result<String, LookupError> {
    let value = to_json(document, format);

    let rendered = match format {
        OutputFormat::Compact => serde_json::to_string(&value)?,
        OutputFormat::Relaxed | OutputFormat::Canonical => serde_json::to_string_pretty(&value)?,
    };

    Ok(rendered)
}

/// Writes the rendered result followed by a single newline and flushes.
pub fn write_result<W: Write>(
    out: &mut W,
    document: Option<&Document>,
    format: OutputFormat,
) -> Result<(), LookupError> {
    let rendered = render(document, format)?;
    writeln!(out, "{rendered}")?;
    out.flush()?;

    Ok(())
}
