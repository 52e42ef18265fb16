//! Cross-tenant todo access. Every route requires the `admin` role.

pub mod controller;
pub mod router;
