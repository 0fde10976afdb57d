//! Template interpolation
//!
//! Substitutes `{{name}}` tokens with values from the run's variable store.
//!
//! # Usage
//!
//! ```
//! use sequent_application::template::TemplateInterpolator;
//! use sequent_domain::VariableStore;
//!
//! let mut store = VariableStore::new();
//! store.bind("host", serde_json::json!("localhost:8080"));
//!
//! let interpolator = TemplateInterpolator::new(&store);
//! let result = interpolator.interpolate("http://{{host}}/users/{{id}}");
//! assert_eq!(result.resolved, "http://localhost:8080/users/{{id}}");
//! assert_eq!(result.unresolved, vec!["id"]);
//! ```

pub mod interpolator;
pub mod parser;

pub use interpolator::{Interpolation, TemplateInterpolator};
pub use parser::{TemplateToken, parse_tokens};
