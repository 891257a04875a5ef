pub mod comites;
pub mod descuentos;
pub mod empresas;
pub mod eventos;
