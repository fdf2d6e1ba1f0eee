pub mod classify;
pub mod domain;
pub mod enums;
pub mod error;
pub mod feature;
pub mod mode;

pub use classify::{
    CATEGORY_PROPERTY, Category, CategoryCounts, assigned_category, category_of, classify,
    classify_all,
};
pub use domain::{EnumDomain, enum_validator};
pub use enums::{Profile, RoadKind};
pub use error::{InvalidEnumValue, ModelError, Result};
pub use feature::{Feature, FeatureCollection, TagValue, Tags};
pub use mode::{BoundingBox, LonLat, Mode};
