#![allow(missing_docs)]

use tvgbind::bind::{BindError, GeneratorConfig, ResolvedType, generate, parse_header, render_enums, render_natives, render_structs};

const ROUND_TRIP: &str = r#"
typedef enum {
    TVG_FOO_A,
    TVG_FOO_B = 1 << 1
} Tvg_Foo;

typedef struct
{
    float width;
    uint32_t count;
} Tvg_Size;

typedef struct _Tvg_Widget* Tvg_Widget;

/**
 * @brief Reads the widget weight.
 * @param[in] widget The widget.
 * @param[out] weight The weight.
 */
TVG_API Tvg_Result tvg_widget_get_weight(Tvg_Widget widget, float* weight);
"#;

#[test]
fn small_header_round_trips_to_bindings() {
	let model = parse_header(ROUND_TRIP).expect("header parses");
	let config = GeneratorConfig::default();

	assert_eq!(model.enums.len(), 1);
	assert!(model.enums[0].is_flags);
	let enums = render_enums(&model, &config);
	assert!(enums.contains("[Flags]\npublic enum Foo\n{\n\tA,\n\tB = 1 << 1,\n}"));

	assert_eq!(model.structs.len(), 1);
	let structs = render_structs(&model, &config);
	assert_eq!(structs.matches("public partial struct").count(), 1);
	assert!(structs.contains("public partial struct Size\n{\n\tpublic float Width;\n\tpublic uint Count;\n}"));
	assert!(!structs.contains("Widget"));

	assert_eq!(model.handles.len(), 1);
	assert_eq!(model.handles[0].name, "WidgetHandle");

	let natives = render_natives(&model, &config);
	assert!(natives.contains("internal static extern Result tvg_widget_get_weight(WidgetHandle widget, out float weight);"));
}

#[test]
fn enum_without_literals_keeps_sequential_order() {
	let model = parse_header("typedef enum { TVG_SEQ_ZERO, TVG_SEQ_ONE, TVG_SEQ_TWO, TVG_SEQ_THREE } Tvg_Seq;").expect("header parses");
	let values = &model.enums[0].values;
	assert!(values.iter().all(|value| value.literal.is_none()));
	let names: Vec<_> = values.iter().map(|value| value.name.as_str()).collect();
	assert_eq!(names, vec!["Zero", "One", "Two", "Three"]);

	let text = render_enums(&model, &GeneratorConfig::default());
	assert!(text.contains("public enum Seq\n{\n\tZero,\n\tOne,\n\tTwo,\n\tThree,\n}"));
	assert!(!text.contains("[Flags]"));
}

#[test]
fn ten_field_struct_keeps_declaration_order() {
	let header = "typedef struct {\n    float f0; float f1; float f2; float f3; float f4;\n    float f5; float f6; float f7; float f8; float f9;\n} Tvg_Ten;";
	let model = parse_header(header).expect("header parses");
	let names: Vec<_> = model.structs[0].fields.iter().map(|field| field.name.as_str()).collect();
	assert_eq!(names, vec!["F0", "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9"]);

	let text = render_structs(&model, &GeneratorConfig::default());
	let positions: Vec<usize> = names.iter().map(|name| text.find(&format!("public float {name};")).expect("field rendered")).collect();
	assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn parameter_order_matches_source() {
	let header = "TVG_API void tvg_many(int a, float b, bool c, uint8_t d, const char* e, size_t f);";
	let model = parse_header(header).expect("header parses");
	let names: Vec<_> = model.functions[0].params.iter().map(|param| param.name.as_str()).collect();
	assert_eq!(names, vec!["a", "b", "c", "d", "e", "f"]);
	assert_eq!(model.functions[0].params[4].ty, ResolvedType::Text);

	let natives = render_natives(&model, &GeneratorConfig::default());
	assert!(natives.contains(
		"internal static extern void tvg_many(int a, float b, [MarshalAs(UnmanagedType.U1)] bool c, byte d, [MarshalAs(UnmanagedType.LPUTF8Str)] string e, nuint f);"
	));
}

#[test]
fn malformed_header_writes_nothing() {
	let dir = tempfile::tempdir().expect("tempdir");
	let header = dir.path().join("broken.h");
	std::fs::write(&header, "typedef enum {\n    TVG_FOO_A,\n    TVG_FOO_B\n").expect("write header");
	let output = dir.path().join("out");

	let err = generate(&header, &output, &GeneratorConfig::default()).expect_err("generation fails");
	assert!(matches!(err, BindError::Expected { expected: "}", .. }));
	assert!(!output.exists());
}
