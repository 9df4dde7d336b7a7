/// Controls when default-value expressions are emitted for concrete (class)
/// declarations. Interface declarations never carry defaults, regardless of
/// mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DefaultValueMode {
    /// Never emit defaults.
    #[default]
    Disabled,

    /// Always emit a default, synthesizing a safe literal when the schema
    /// declares none.
    Enabled,

    /// Emit a default only for properties that declare one explicitly.
    Strict,
}
