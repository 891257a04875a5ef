use contracts::dashboards::stats::{ResumenStats, SerieActividad, SeriePunto};
use contracts::envelope::{extract_code, extract_message, extract_success};
use contracts::error::ApiError;
use serde_json::Value;

use crate::shared::api;

fn check_success(body: &Value) -> Result<(), ApiError> {
    if extract_success(body) {
        Ok(())
    } else {
        Err(ApiError::Server {
            code: extract_code(body),
            message: extract_message(body)
                .unwrap_or_else(|| "estadísticas no disponibles".to_string()),
        })
    }
}

pub async fn fetch_resumen() -> Result<ResumenStats, ApiError> {
    let body = api::get_envelope("/api/estadisticas.php?action=resumen").await?;
    check_success(&body)?;
    api::decode_object::<ResumenStats>(&body, &["data", "resumen"])
}

pub async fn fetch_actividad() -> Result<SerieActividad, ApiError> {
    let body = api::get_envelope("/api/estadisticas.php?action=actividad").await?;
    check_success(&body)?;
    decodificar_serie(&body)
}

/// Newer deployments wrap the points in `{puntos: [...]}`; older ones return
/// the bare point array under `data`. An empty series is a valid answer, not
/// a decode failure.
fn decodificar_serie(body: &Value) -> Result<SerieActividad, ApiError> {
    if let Ok(serie) = api::decode_object::<SerieActividad>(body, &["data", "serie"]) {
        return Ok(serie);
    }
    let puntos = api::decode_object::<Vec<SeriePunto>>(body, &["data", "serie"])?;
    Ok(SerieActividad { puntos })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_series_is_a_valid_answer() {
        let body = json!({"success": true, "data": {"puntos": []}});
        let serie = decodificar_serie(&body).unwrap();
        assert!(serie.puntos.is_empty());
    }

    #[test]
    fn bare_point_array_still_decodes() {
        let body = json!({"success": true, "data": [{"etiqueta": "Ene", "valor": 4.0}]});
        let serie = decodificar_serie(&body).unwrap();
        assert_eq!(serie.puntos.len(), 1);
        assert_eq!(serie.puntos[0].etiqueta, "Ene");
    }
}
