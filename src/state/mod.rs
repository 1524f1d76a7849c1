// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod session_state;
pub mod operation_state;
pub mod app_state;

pub use session_state::*;
pub use operation_state::*;
pub use app_state::*;
