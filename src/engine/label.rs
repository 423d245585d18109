/// Text shown under the payload slider. The bounds are printed as given, ordering is
/// guaranteed by the slider.
pub fn payload_range_label(low: f64, high: f64) -> String {
    format!("Selected payload range: {low} kg — {high} kg")
}
