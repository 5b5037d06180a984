/// Map `value` linearly from `[input_min, input_max]` onto
/// `[scale_min, scale_max]`, truncating toward zero.
///
/// An empty input range (`input_min == input_max`) has no meaningful result.
pub fn scale(value: i32, input_min: i32, input_max: i32, scale_min: i32, scale_max: i32) -> i32 {
	let ratio = (value as f32 - input_min as f32) / (input_max as f32 - input_min as f32);
	(ratio * (scale_max as f32 - scale_min as f32) + scale_min as f32) as i32
}

/// [`scale`], or `None` when the input range is empty
pub fn checked_scale(
	value: i32,
	input_min: i32,
	input_max: i32,
	scale_min: i32,
	scale_max: i32,
) -> Option<i32> {
	if input_min == input_max {
		return None;
	}
	Some(scale(value, input_min, input_max, scale_min, scale_max))
}
