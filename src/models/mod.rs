pub mod attendance;
pub mod attendance_status;
pub mod event;
pub mod join_status;
pub mod member;
pub mod reference;
