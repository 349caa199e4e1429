#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use tvgbind::bind::{GeneratorConfig, ParamDirection, ResolvedType, generate, load_model};

#[test]
fn fixture_header_parses_every_declaration() {
	let model = load_model(fixture_path("thorvg_capi.h")).expect("fixture parses");

	let enums: Vec<_> = model.enums.iter().map(|item| item.name.as_str()).collect();
	assert_eq!(
		enums,
		vec!["Engine", "Result", "Colorspace", "EngineOptions", "MaskMethod", "PaintType", "StrokeCap", "StrokeFill"]
	);
	let structs: Vec<_> = model.structs.iter().map(|item| item.name.as_str()).collect();
	assert_eq!(structs, vec!["ColorStop", "Point", "Matrix"]);
	let handles: Vec<_> = model.handles.iter().map(|item| item.name.as_str()).collect();
	assert_eq!(handles, vec!["CanvasHandle", "PaintHandle", "GradientHandle", "SaverHandle", "AnimationHandle"]);
	assert_eq!(model.functions.len(), 44);
	assert_eq!(model.functions[0].name, "tvg_engine_init");
	assert_eq!(model.functions[43].name, "tvg_accessor_generate_id");
}

#[test]
fn fixture_enums_keep_ordinals_and_flags() {
	let model = load_model(fixture_path("thorvg_capi.h")).expect("fixture parses");
	let flagged: Vec<_> = model.enums.iter().filter(|item| item.is_flags).map(|item| item.name.as_str()).collect();
	assert_eq!(flagged, vec!["Engine", "EngineOptions"]);

	let paint_type = model.enums.iter().find(|item| item.name == "PaintType").expect("paint type enum");
	let members: Vec<_> = paint_type.values.iter().map(|value| (value.name.as_str(), value.literal.as_deref())).collect();
	assert_eq!(
		members,
		vec![
			("Undef", Some("0")),
			("Shape", None),
			("Scene", None),
			("Picture", None),
			("Text", None),
			("LinearGrad", Some("10")),
			("RadialGrad", None),
		]
	);
}

#[test]
fn fixture_parameters_pick_up_documented_directions() {
	let model = load_model(fixture_path("thorvg_capi.h")).expect("fixture parses");
	let version = model.functions.iter().find(|item| item.name == "tvg_engine_version").expect("version function");
	assert!(version.params.iter().all(|param| param.direction == ParamDirection::Out));
	assert_eq!(version.params[3].ty, ResolvedType::Pointer);
	assert_eq!(version.params[3].pointer_depth, 2);

	let resolver = model
		.functions
		.iter()
		.find(|item| item.name == "tvg_picture_set_asset_resolver")
		.expect("resolver function");
	assert_eq!(resolver.params[1].ty, ResolvedType::Pointer);
	assert_eq!(resolver.params[2].ty, ResolvedType::Pointer);
}

#[test]
fn fixture_generates_three_artifacts() {
	let dir = tempfile::tempdir().expect("tempdir");
	let output = dir.path().join("Generated");
	let report = generate(fixture_path("thorvg_capi.h"), &output, &GeneratorConfig::default()).expect("generation succeeds");

	assert_eq!(report.enums, 8);
	assert_eq!(report.structs, 3);
	assert_eq!(report.handles, 5);
	assert_eq!(report.functions, 44);
	let names: Vec<_> = report.files.iter().filter_map(|path| path.file_name()).filter_map(|name| name.to_str()).collect();
	assert_eq!(names, vec!["Enums.g.cs", "Structs.g.cs", "NativeMethods.g.cs"]);

	let natives = std::fs::read_to_string(output.join("NativeMethods.g.cs")).expect("natives written");
	for line in [
		"internal static extern Result tvg_engine_init(uint threads);",
		"internal static extern Result tvg_engine_version(out uint major, out uint minor, out uint micro, out nint version);",
		"internal static extern CanvasHandle tvg_swcanvas_create(EngineOptions op);",
		"internal static extern Result tvg_canvas_draw(CanvasHandle canvas, [MarshalAs(UnmanagedType.U1)] bool clear);",
		"internal static extern Result tvg_paint_get_transform(PaintHandle paint, out Matrix m);",
		"internal static extern Result tvg_paint_get_type(PaintHandle paint, out PaintType type);",
		"internal static extern Result tvg_shape_append_path(PaintHandle paint, in byte cmds, uint cmdCnt, in Point pts, uint ptsCnt);",
		"internal static extern Result tvg_shape_get_gradient(PaintHandle paint, out GradientHandle grad);",
		"internal static extern Result tvg_gradient_get_color_stops(GradientHandle grad, out nint color_stop, out uint cnt);",
		"internal static extern Result tvg_picture_load(PaintHandle picture, [MarshalAs(UnmanagedType.LPUTF8Str)] string path);",
		"internal static extern uint tvg_accessor_generate_id([MarshalAs(UnmanagedType.LPUTF8Str)] string name);",
	] {
		assert!(natives.contains(line), "missing {line}");
	}
	assert!(natives.contains("[return: MarshalAs(UnmanagedType.U1)]\n\tinternal static extern bool tvg_paint_get_visible(PaintHandle paint);"));
	assert_eq!(natives.matches("[DllImport(LibraryName").count(), 44);

	let structs = std::fs::read_to_string(output.join("Structs.g.cs")).expect("structs written");
	assert_eq!(structs.matches("public partial struct").count(), 3);
	assert!(!structs.contains("Handle"));
	assert!(structs.contains("\t/// The relative position of the color.\n\t/// </summary>\n\tpublic float Offset;"));

	let enums = std::fs::read_to_string(output.join("Enums.g.cs")).expect("enums written");
	assert!(enums.contains("[Flags]\npublic enum Engine\n"));
	assert!(enums.contains("\tSw = (1 << 1),\n"));
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}
