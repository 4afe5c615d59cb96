use crate::codegen::collector::NamedBounds;
use crate::codegen::literal::float_literal;

// ============================================================================
// Header text assembly
// ============================================================================

/// Build the single-header text for `records`.
///
/// Layout:
/// ```text
/// #ifndef <GUARD>_H
/// #define <GUARD>_H
/// #ifdef __cplusplus
/// extern "C" {
/// #endif
/// extern const float fbh_Frame[4];
/// #ifdef __cplusplus
/// }
/// #endif
/// #endif // <GUARD>_H
/// #ifdef <GUARD>_IMPL
/// #undef <GUARD>_IMPL
/// const float fbh_Frame[4] = {0.0f, 0.0f, 100.0f, 50.0f};
/// #endif // <GUARD>_IMPL
/// ```
///
/// Declarations are include-guarded; storage is only emitted in the one
/// translation unit that defines `<GUARD>_IMPL` before including.
pub fn assemble(records: &[NamedBounds], guard: &str) -> String {
    let mut out = String::with_capacity(256 + records.len() * 96);

    out.push_str(&format!(
        "#ifndef {guard}_H\n#define {guard}_H\n#ifdef __cplusplus\nextern \"C\" {{\n#endif\n"
    ));
    for record in records {
        out.push_str(&declaration_line(record));
    }

    out.push_str(&format!(
        "#ifdef __cplusplus\n}}\n#endif\n#endif // {guard}_H\n#ifdef {guard}_IMPL\n#undef {guard}_IMPL\n"
    ));
    for record in records {
        out.push_str(&definition_line(record));
    }

    out.push_str(&format!("#endif // {guard}_IMPL\n"));
    out
}

pub fn declaration_line(record: &NamedBounds) -> String {
    format!("extern const float {}[4];\n", record.identifier)
}

pub fn definition_line(record: &NamedBounds) -> String {
    let [x, y, w, h] = record.bounds.as_array().map(float_literal);
    format!(
        "const float {}[4] = {{{}, {}, {}, {}}};\n",
        record.identifier, x, y, w, h
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::collector::BoundsRecord;

    fn record(id: &str, x: f64, y: f64, width: f64, height: f64) -> NamedBounds {
        NamedBounds {
            identifier: id.to_string(),
            bounds: BoundsRecord { x, y, width, height },
        }
    }

    #[test]
    fn definition_keeps_field_order() {
        let line = definition_line(&record("fbh_A", 10.0, 20.5, 100.0, 50.0));
        assert_eq!(line, "const float fbh_A[4] = {10.0f, 20.5f, 100.0f, 50.0f};\n");
    }

    #[test]
    fn empty_record_list_still_has_guards() {
        let text = assemble(&[], "G");
        assert_eq!(
            text,
            "#ifndef G_H\n#define G_H\n#ifdef __cplusplus\nextern \"C\" {\n#endif\n\
             #ifdef __cplusplus\n}\n#endif\n#endif // G_H\n#ifdef G_IMPL\n#undef G_IMPL\n\
             #endif // G_IMPL\n"
        );
    }
}
