//! # sqltemplate
//!
//! Build `SELECT` / `UPDATE` statements as SQL templates with named
//! placeholders plus a parameter map, ready for a parameterized-query layer.
//!
//! ## Features
//!
//! - **No literal values in SQL**: every value becomes a `#{key}` placeholder
//! - **Deterministic keys**: keys derive from column + operation (`statuseq`, `idin0`, ...)
//! - **Sorted params**: the parameter map always iterates in key order
//! - **Absent is a no-op**: passing `None` to any call leaves the builder untouched
//!
//! ```
//! use sqltemplate::TemplateBuilder;
//!
//! let built = TemplateBuilder::new()
//!     .update(true)
//!     .table("T1")
//!     .set("C1", 2)
//!     .set("C2", "abc")
//!     .eq("C1", 1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(built.template, "UPDATE T1 SET C1 = #{C1set},C2 = #{C2set} WHERE C1 = #{C1eq}");
//! assert_eq!(
//!     serde_json::to_string(&built.params).unwrap(),
//!     r#"{"C1eq":1,"C1set":2,"C2set":"abc"}"#
//! );
//! ```

pub mod error;
pub mod template;
pub mod value;

pub use error::{TemplateError, TemplateResult};
pub use template::{BuiltTemplate, Mode, TemplateBuilder};
pub use value::{IntoParam, ParamValue};
