//! Repositories for the game-time planner tables.
//!
//! Three small repositories back the planner: the recurring weekly template,
//! per-date hour overrides, and absence date ranges.

pub mod absence;
pub mod r#override;
pub mod template;

pub use absence::GameTimeAbsenceRepository;
pub use r#override::GameTimeOverrideRepository;
pub use template::GameTimeTemplateRepository;
