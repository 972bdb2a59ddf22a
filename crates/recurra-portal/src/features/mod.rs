//! Feature slices, one directory per screen/domain area.

pub mod contracts;
pub mod home;
