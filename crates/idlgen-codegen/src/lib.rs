//! Render-model producers for interface code generation.
//!
//! `idlgen-codegen` turns the language-agnostic interface model into records
//! that a template renderer consumes to emit target-language sources. This
//! crate covers enums: identifier normalization, the enum-wide kind and return
//! type decisions, member parameters, imports, and description wrapping.
//!
//! # Architecture
//!
//! ```text
//! Loader            Model              Producer            Renderer
//! ──────────     ─────────────     ─────────────────     ──────────
//! JSON model ──> Enum/EnumElement ──> EnumsProducer ──> RenderModel ──> templates
//!  (input.rs)      (model.rs)       (producer/enums.rs)  (render.rs)
//! ```
//!
//! # Example
//!
//! ```
//! use idlgen_codegen::{EnumsProducer, Producer, input::parse_enums};
//! use idlgen_codegen::render::{Kind, ReturnType};
//!
//! let model = serde_json::json!([{
//!     "name": "media",
//!     "elements": [{ "name": "CD-ROM" }, { "name": "DVD" }]
//! }]);
//!
//! let enums = parse_enums(&model).unwrap();
//! let render = EnumsProducer::new("com.example.enums").transform(&enums[0]);
//!
//! assert_eq!(render.class_name, "Media");
//! assert_eq!(render.kind, Kind::Custom);
//! assert_eq!(render.return_type, ReturnType::String);
//! assert_eq!(render.params[0].name, "CD_ROM");
//! ```

pub mod config;
pub mod description;
pub mod input;
pub mod model;
pub mod naming;
pub mod producer;
pub mod render;
pub mod traits;

pub use config::{ConfigError, GeneratorConfig};
pub use input::{ParseError, parse_enums, parse_enums_str};
pub use producer::{EnumsProducer, ReturnTypePolicy};
pub use render::{Kind, Param, RenderModel, ReturnType};
pub use traits::Producer;
