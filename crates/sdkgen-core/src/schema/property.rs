/// A scalar, array, or object typed field on a model.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    /// The declared type, if the introspection step could resolve one.
    /// `None` degrades the mapped type to `any` rather than failing the run.
    pub ty: Option<PropertyTy>,

    /// True if the field must be present.
    pub required: bool,

    /// The default value declared on the property, verbatim. Kept as loose
    /// JSON because the host schema does not constrain it to match `ty`.
    pub default: Option<serde_json::Value>,
}

/// The closed set of property type constructors recognized by the host data
/// layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyTy {
    String,
    Number,
    Boolean,
    Date,
    GeoPoint,

    /// Typed array. The element descriptor is always present; nesting depth
    /// is bounded by the source schema.
    Array(Box<PropertyTy>),

    /// Structured object with no further type information.
    Object,

    /// A named type constructor the generator does not recognize.
    Unknown,
}

impl Property {
    pub fn new(ty: PropertyTy) -> Self {
        Self {
            ty: Some(ty),
            required: false,
            default: None,
        }
    }

    /// A property whose type descriptor could not be resolved.
    pub fn untyped() -> Self {
        Self {
            ty: None,
            required: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// True if the schema declared an explicit default for this property.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

impl PropertyTy {
    pub fn array(element: PropertyTy) -> Self {
        Self::Array(Box::new(element))
    }
}
