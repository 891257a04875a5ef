use serde::{Deserialize, Serialize};

use super::common::{o_sin_especificar, RecordId, ResourceRecord};

/// Descuento ofrecido por una empresa asociada.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Descuento {
    pub id: RecordId,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub empresa: String,
    #[serde(default)]
    pub porcentaje: f64,
    #[serde(default, rename = "fecha_inicio")]
    pub fecha_inicio: String,
    #[serde(default, rename = "fecha_fin")]
    pub fecha_fin: String,
}

impl Descuento {
    pub fn titulo_mostrado(&self) -> &str {
        o_sin_especificar(&self.titulo)
    }

    pub fn empresa_mostrada(&self) -> &str {
        o_sin_especificar(&self.empresa)
    }

    /// Whether the offer is inside its validity window on the given date.
    /// Missing dates count as open-ended on that side.
    pub fn vigente_en(&self, hoy: chrono::NaiveDate) -> bool {
        let inicio = chrono::NaiveDate::parse_from_str(&self.fecha_inicio, "%Y-%m-%d").ok();
        let fin = chrono::NaiveDate::parse_from_str(&self.fecha_fin, "%Y-%m-%d").ok();
        inicio.map(|d| d <= hoy).unwrap_or(true) && fin.map(|d| hoy <= d).unwrap_or(true)
    }
}

impl ResourceRecord for Descuento {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_fields(&self) -> Vec<&str> {
        vec![&self.titulo, &self.descripcion, &self.empresa]
    }

    fn categoria(&self) -> Option<&str> {
        Some(&self.categoria)
    }

    fn estado(&self) -> Option<&str> {
        Some(&self.estado)
    }

    fn collection_key() -> &'static str {
        "descuentos"
    }

    fn endpoint_path() -> &'static str {
        "/api/descuentos.php"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DescuentoDto {
    pub id: Option<RecordId>,
    pub titulo: String,
    pub descripcion: String,
    pub categoria: String,
    pub estado: String,
    pub empresa: String,
    pub porcentaje: f64,
    pub fecha_inicio: String,
    pub fecha_fin: String,
}

impl DescuentoDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.titulo.trim().is_empty() {
            return Err("El título del descuento es obligatorio".into());
        }
        if self.empresa.trim().is_empty() {
            return Err("Indica la empresa que ofrece el descuento".into());
        }
        if !(0.0..=100.0).contains(&self.porcentaje) {
            return Err("El porcentaje debe estar entre 0 y 100".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dia(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn validity_window() {
        let descuento = Descuento {
            fecha_inicio: "2026-01-01".into(),
            fecha_fin: "2026-06-30".into(),
            ..Default::default()
        };
        assert!(descuento.vigente_en(dia("2026-03-15")));
        assert!(!descuento.vigente_en(dia("2026-07-01")));
        assert!(!descuento.vigente_en(dia("2025-12-31")));
    }

    #[test]
    fn missing_dates_are_open_ended() {
        let descuento = Descuento::default();
        assert!(descuento.vigente_en(dia("2026-03-15")));
    }

    #[test]
    fn porcentaje_bounds() {
        let mut dto = DescuentoDto {
            titulo: "2x1".into(),
            empresa: "Acme".into(),
            porcentaje: 120.0,
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.porcentaje = 15.0;
        assert!(dto.validate().is_ok());
    }
}
