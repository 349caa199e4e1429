use super::{enum_prefix, escape_identifier, to_enum_member_name, to_field_name, to_handle_name, to_type_name};

#[test]
fn record_prefix_is_stripped_and_words_joined() {
	assert_eq!(to_type_name("Tvg_Stroke_Join"), "StrokeJoin");
	assert_eq!(to_type_name("Tvg_Color_Stop"), "ColorStop");
	assert_eq!(to_type_name("_Tvg_Canvas"), "Canvas");
	assert_eq!(to_type_name("Tvg_Colorspace"), "Colorspace");
}

#[test]
fn override_table_wins_over_mechanical_transform() {
	assert_eq!(to_type_name("Tvg_Engine_Option"), "EngineOptions");
	assert_eq!(to_type_name("Tvg_Type"), "PaintType");
}

#[test]
fn words_are_lowercased_after_first_letter() {
	assert_eq!(to_type_name("Tvg_MASK_Method"), "MaskMethod");
	assert_eq!(to_field_name("offset"), "Offset");
	assert_eq!(to_field_name("e11"), "E11");
	assert_eq!(to_field_name("_reserved_bits"), "ReservedBits");
}

#[test]
fn handle_names_get_suffix() {
	assert_eq!(to_handle_name("Tvg_Paint"), "PaintHandle");
	assert_eq!(to_handle_name("Tvg_Animation"), "AnimationHandle");
}

#[test]
fn enum_prefix_inserts_underscores_before_internal_capitals() {
	assert_eq!(enum_prefix("Tvg_Stroke_Join"), "TVG_STROKE_JOIN_");
	assert_eq!(enum_prefix("Tvg_BlendMethod"), "TVG_BLEND_METHOD_");
	assert_eq!(enum_prefix("Tvg_Result"), "TVG_RESULT_");
}

#[test]
fn enum_members_strip_own_prefix() {
	assert_eq!(to_enum_member_name("Tvg_Result", "TVG_RESULT_INVALID_ARGUMENT"), "InvalidArgument");
	assert_eq!(to_enum_member_name("Tvg_Colorspace", "TVG_COLORSPACE_ABGR8888S"), "Abgr8888s");
	assert_eq!(to_enum_member_name("Tvg_Engine_Option", "TVG_ENGINE_OPTION_DEFAULT"), "Default");
}

#[test]
fn enum_members_fall_back_to_generic_prefix() {
	assert_eq!(to_enum_member_name("Tvg_Stroke_Fill", "TVG_STROKE_FILL_PAD"), "Pad");
	assert_eq!(to_enum_member_name("Tvg_Spread", "TVG_STROKE_FILL_REFLECT"), "StrokeFillReflect");
	assert_eq!(to_enum_member_name("Foo", "FOO_A"), "FooA");
}

#[test]
fn reserved_words_are_escaped() {
	assert_eq!(escape_identifier("out"), "@out");
	assert_eq!(escape_identifier("params"), "@params");
	assert_eq!(escape_identifier("paint"), "paint");
}
