//! Sensitivity sweeps over one contract input.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Sensitivity Sweep               │
//! ├──────────────────────────────────────────────┤
//! │  SweepVariable      - Which input is swept   │
//! │  SweepSpecification - Base params + values   │
//! │  SensitivitySweeper - Execution              │
//! │  SweepResult        - Index-aligned outputs  │
//! └──────────────────────────────────────────────┘
//! ```

mod error;
mod grid;
mod sweep;
mod variable;

pub use error::SweepError;
pub use grid::linspace;
pub use sweep::{SensitivitySweeper, SweepResult, SweepSpecification, DEFAULT_SWEEP_POINTS};
pub use variable::SweepVariable;
