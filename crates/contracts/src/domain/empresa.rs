use serde::{Deserialize, Serialize};

use super::common::{o_sin_especificar, RecordId, ResourceRecord};

/// Empresa asociada al clúster.
///
/// The backend omits most fields for older rows, so everything except the id
/// deserializes defensively with defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Empresa {
    pub id: RecordId,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub estado: String,
    /// "1"/"0" in legacy rows, true/false in newer ones.
    #[serde(default)]
    pub convenio: serde_json::Value,
    #[serde(default)]
    pub logo: String,
    #[serde(default, rename = "sitio_web")]
    pub sitio_web: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub direccion: String,
}

impl Empresa {
    pub fn nombre_mostrado(&self) -> &str {
        o_sin_especificar(&self.nombre)
    }

    pub fn categoria_mostrada(&self) -> &str {
        o_sin_especificar(&self.categoria)
    }

    /// Normalize the legacy convenio flag ("1", 1, true all mean yes).
    pub fn tiene_convenio(&self) -> bool {
        match &self.convenio {
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::Number(n) => n.as_i64() == Some(1),
            serde_json::Value::String(s) => s == "1" || s == "true",
            _ => false,
        }
    }
}

impl ResourceRecord for Empresa {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_fields(&self) -> Vec<&str> {
        vec![&self.nombre, &self.descripcion, &self.direccion]
    }

    fn categoria(&self) -> Option<&str> {
        Some(&self.categoria)
    }

    fn estado(&self) -> Option<&str> {
        Some(&self.estado)
    }

    fn collection_key() -> &'static str {
        "empresas"
    }

    fn endpoint_path() -> &'static str {
        "/api/empresas.php"
    }
}

/// Create/update payload for an empresa.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmpresaDto {
    pub id: Option<RecordId>,
    pub nombre: String,
    pub descripcion: String,
    pub categoria: String,
    pub estado: String,
    pub convenio: bool,
    pub logo: String,
    pub sitio_web: String,
    pub email: String,
    pub telefono: String,
    pub direccion: String,
}

impl EmpresaDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre de la empresa es obligatorio".into());
        }
        if self.categoria.trim().is_empty() {
            return Err("Selecciona una categoría".into());
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err("El email de contacto no es válido".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_sparse_legacy_row() {
        let empresa: Empresa = serde_json::from_value(json!({"id": 1, "nombre": "Acme"})).unwrap();
        assert_eq!(empresa.nombre, "Acme");
        assert_eq!(empresa.nombre_mostrado(), "Acme");
        assert_eq!(empresa.categoria_mostrada(), "Sin especificar");
        assert!(!empresa.tiene_convenio());
    }

    #[test]
    fn convenio_flag_tolerates_legacy_encodings() {
        for raw in [json!("1"), json!(1), json!(true)] {
            let empresa: Empresa =
                serde_json::from_value(json!({"id": 1, "convenio": raw})).unwrap();
            assert!(empresa.tiene_convenio());
        }
        let empresa: Empresa = serde_json::from_value(json!({"id": 1, "convenio": "0"})).unwrap();
        assert!(!empresa.tiene_convenio());
    }

    #[test]
    fn dto_requires_nombre_and_categoria() {
        let mut dto = EmpresaDto { nombre: "Acme".into(), ..Default::default() };
        assert!(dto.validate().is_err());
        dto.categoria = "transporte".into();
        assert!(dto.validate().is_ok());
        dto.email = "sin-arroba".into();
        assert!(dto.validate().is_err());
    }
}
