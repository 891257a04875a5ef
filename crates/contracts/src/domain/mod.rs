pub mod comite;
pub mod common;
pub mod descuento;
pub mod empresa;
pub mod evento;
