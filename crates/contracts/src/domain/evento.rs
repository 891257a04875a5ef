use serde::{Deserialize, Serialize};

use super::common::{o_sin_especificar, RecordId, ResourceRecord};

/// Evento organizado por el clúster.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Evento {
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
    pub fecha: String,
    #[serde(default)]
    pub hora: String,
    #[serde(default)]
    pub lugar: String,
}

impl Evento {
    pub fn titulo_mostrado(&self) -> &str {
        o_sin_especificar(&self.titulo)
    }

    pub fn lugar_mostrado(&self) -> &str {
        o_sin_especificar(&self.lugar)
    }

    /// Derived facet: whether the event is still ahead of the given date.
    /// Events with unparseable dates sort as upcoming so they stay visible.
    pub fn es_proximo(&self, hoy: chrono::NaiveDate) -> bool {
        chrono::NaiveDate::parse_from_str(&self.fecha, "%Y-%m-%d")
            .map(|d| d >= hoy)
            .unwrap_or(true)
    }
}

impl ResourceRecord for Evento {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_fields(&self) -> Vec<&str> {
        vec![&self.titulo, &self.descripcion, &self.lugar]
    }

    fn categoria(&self) -> Option<&str> {
        Some(&self.categoria)
    }

    fn estado(&self) -> Option<&str> {
        Some(&self.estado)
    }

    fn collection_key() -> &'static str {
        "eventos"
    }

    fn endpoint_path() -> &'static str {
        "/api/eventos.php"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventoDto {
    pub id: Option<RecordId>,
    pub titulo: String,
    pub descripcion: String,
    pub categoria: String,
    pub estado: String,
    pub fecha: String,
    pub hora: String,
    pub lugar: String,
}

impl EventoDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.titulo.trim().is_empty() {
            return Err("El título del evento es obligatorio".into());
        }
        if self.fecha.trim().is_empty() {
            return Err("Indica la fecha del evento".into());
        }
        if chrono::NaiveDate::parse_from_str(self.fecha.trim(), "%Y-%m-%d").is_err() {
            return Err("La fecha debe tener formato AAAA-MM-DD".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn upcoming_facet() {
        let hoy = NaiveDate::parse_from_str("2026-08-26", "%Y-%m-%d").unwrap();
        let pasado = Evento { fecha: "2026-08-01".into(), ..Default::default() };
        let proximo = Evento { fecha: "2026-09-10".into(), ..Default::default() };
        let sin_fecha = Evento::default();
        assert!(!pasado.es_proximo(hoy));
        assert!(proximo.es_proximo(hoy));
        assert!(sin_fecha.es_proximo(hoy));
    }

    #[test]
    fn dto_rejects_bad_dates() {
        let mut dto = EventoDto { titulo: "Asamblea".into(), ..Default::default() };
        assert!(dto.validate().is_err());
        dto.fecha = "10/09/2026".into();
        assert!(dto.validate().is_err());
        dto.fecha = "2026-09-10".into();
        assert!(dto.validate().is_ok());
    }
}
