//! `ph-field` — the shared scalar trail field.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`grid`]    | `CellIndex`, toroidal and reflective index helpers             |
//! | [`kernel`]  | `Kernel` — 3×3 diffusion weights                               |
//! | [`field`]   | `TrailField` — owned grid with `deposit` and `diffuse`         |
//! | [`view`]    | `FieldView<'a>` (borrowed, read-only), `FieldSnapshot` (owned) |
//! | [`error`]   | `FieldError`, `FieldResult<T>`                                 |
//!
//! # Coordinates
//!
//! Cells are addressed as `(x, y)` with `x ∈ [0, width)` and
//! `y ∈ [0, height)`.  Storage is a flat row-major `Vec<f32>`: index
//! `y * width + x`.  Agents address cells toroidally; the diffusion
//! convolution uses the field's [`BorderMode`].
//!
//! # Feature flags
//!
//! | Flag       | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | `diffuse` processes rows on Rayon's thread pool.    |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.  |

pub mod error;
pub mod field;
pub mod grid;
pub mod kernel;
pub mod view;


pub use error::{FieldError, FieldResult};
pub use field::TrailField;
pub use grid::CellIndex;
pub use kernel::Kernel;
pub use view::{FieldSnapshot, FieldView};

pub use ph_core::{BorderMode, DepositPolicy};
