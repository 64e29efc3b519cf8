//! Rendering of the generated `PROGMEM` constant.
//!
//! The block replaces the anchor include line in the firmware source:
//!
//! ```text
//! // AUTO-GENERATED WEB UI (from web/ui.html)
//! // Generated: 2024-05-01T12:00:00
//! #include <pgmspace.h>
//! const char WEB_UI_HTML[] PROGMEM = R"HS_WEB_UI(
//! <!DOCTYPE html>
//! ...
//! )HS_WEB_UI";
//! ```
//!
//! The payload is written verbatim, which is only sound when the delimiter came
//! from [`crate::delimiter::choose_delimiter`] for that same payload.

use chrono::NaiveDateTime;

use crate::clock::format_timestamp;
use crate::config::EmbedConfig;

/// Render the constant declaration block.
///
/// `source_label` names the document the payload came from and is only used in
/// the provenance comment. `payload` is expected to end with a newline, which
/// puts the closing `)DELIM";` on its own line.
pub fn render_constant(
    payload: &str,
    delimiter: &str,
    generated_at: NaiveDateTime,
    source_label: &str,
    config: &EmbedConfig,
) -> String {
    let stamp = format_timestamp(generated_at);
    format!(
        "// AUTO-GENERATED WEB UI (from {source_label})\n\
         // Generated: {stamp}\n\
         {include}\n\
         const char {name}[] {qualifier} = R\"{delimiter}(\n\
         {payload})\
         {delimiter}\";\n",
        include = config.storage_include,
        name = config.constant_name,
        qualifier = config.storage_qualifier,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_render_default_config() {
        let block = render_constant(
            "<p>Hi</p>\n",
            "HS_WEB_UI",
            noon(),
            "web/ui.html",
            &EmbedConfig::default(),
        );
        assert_eq!(
            block,
            "// AUTO-GENERATED WEB UI (from web/ui.html)\n\
             // Generated: 2024-05-01T12:00:00\n\
             #include <pgmspace.h>\n\
             const char WEB_UI_HTML[] PROGMEM = R\"HS_WEB_UI(\n\
             <p>Hi</p>\n\
             )HS_WEB_UI\";\n"
        );
    }

    #[test]
    fn test_render_custom_config() {
        let config = EmbedConfig {
            constant_name: "INDEX".into(),
            storage_qualifier: "ICACHE_RODATA_ATTR".into(),
            storage_include: "#include <c_types.h>".into(),
            ..EmbedConfig::default()
        };
        let block = render_constant("x\n", "D_2", noon(), "index.html", &config);
        assert!(block.contains("#include <c_types.h>\n"));
        assert!(block.contains("const char INDEX[] ICACHE_RODATA_ATTR = R\"D_2(\n"));
        assert!(block.ends_with("x\n)D_2\";\n"));
    }

    #[test]
    fn test_boundary_is_balanced() {
        let payload = "<script>let s = \")\";</script>\n";
        let block = render_constant(payload, "HS_WEB_UI", noon(), "ui.html", &EmbedConfig::default());
        let open = block.find("R\"HS_WEB_UI(").unwrap();
        let close = block.find(")HS_WEB_UI\"").unwrap();
        assert!(open < close);
        assert_eq!(block.matches(")HS_WEB_UI\"").count(), 1);
        assert!(block.contains(payload));
    }
}
