pub mod kind;


#[cfg(feature = "serde")]
pub mod serialization;
