use serde::{Deserialize, Serialize};

use super::common::{o_sin_especificar, RecordId, ResourceRecord};

/// Comité de trabajo del clúster.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Comite {
    pub id: RecordId,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub responsable: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "num_miembros")]
    pub num_miembros: u32,
}

impl Comite {
    pub fn nombre_mostrado(&self) -> &str {
        o_sin_especificar(&self.nombre)
    }

    pub fn responsable_mostrado(&self) -> &str {
        o_sin_especificar(&self.responsable)
    }
}

impl ResourceRecord for Comite {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_fields(&self) -> Vec<&str> {
        vec![&self.nombre, &self.descripcion, &self.responsable]
    }

    fn estado(&self) -> Option<&str> {
        Some(&self.estado)
    }

    fn collection_key() -> &'static str {
        "comites"
    }

    fn endpoint_path() -> &'static str {
        "/api/comites.php"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ComiteDto {
    pub id: Option<RecordId>,
    pub nombre: String,
    pub descripcion: String,
    pub estado: String,
    pub responsable: String,
    pub email: String,
}

impl ComiteDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre del comité es obligatorio".into());
        }
        if self.responsable.trim().is_empty() {
            return Err("Indica la persona responsable".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_validation_messages() {
        let dto = ComiteDto::default();
        assert_eq!(dto.validate().unwrap_err(), "El nombre del comité es obligatorio");

        let dto = ComiteDto { nombre: "Innovación".into(), ..Default::default() };
        assert_eq!(dto.validate().unwrap_err(), "Indica la persona responsable");
    }
}
