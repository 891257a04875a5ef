use contracts::dashboards::stats::SeriePunto;

/// Drawing area for the activity chart, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

pub const GEOMETRIA_ACTIVIDAD: ChartGeometry = ChartGeometry {
    width: 640.0,
    height: 220.0,
    padding: 28.0,
};

/// Maps series points onto the drawing area.
///
/// X positions are spread evenly; Y is linear between zero (bottom edge of
/// the plot) and the series maximum (top edge). A flat or empty series maps
/// onto the baseline instead of dividing by zero.
pub fn escalar_puntos(puntos: &[SeriePunto], geom: ChartGeometry) -> Vec<(f64, f64)> {
    if puntos.is_empty() {
        return Vec::new();
    }

    let plot_w = geom.width - 2.0 * geom.padding;
    let plot_h = geom.height - 2.0 * geom.padding;
    let max = puntos.iter().map(|p| p.valor).fold(0.0_f64, f64::max);

    let step = if puntos.len() > 1 {
        plot_w / (puntos.len() - 1) as f64
    } else {
        0.0
    };

    puntos
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = geom.padding + step * i as f64;
            let y = if max > 0.0 {
                geom.height - geom.padding - (p.valor / max) * plot_h
            } else {
                geom.height - geom.padding
            };
            (x, y)
        })
        .collect()
}

/// Formats scaled points as a `points` attribute for an SVG `<polyline>`.
pub fn atributo_polyline(puntos: &[(f64, f64)]) -> String {
    puntos
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOM: ChartGeometry = ChartGeometry {
        width: 100.0,
        height: 60.0,
        padding: 10.0,
    };

    fn punto(valor: f64) -> SeriePunto {
        SeriePunto {
            etiqueta: "x".to_string(),
            valor,
        }
    }

    #[test]
    fn empty_series_scales_to_nothing() {
        assert!(escalar_puntos(&[], GEOM).is_empty());
    }

    #[test]
    fn maximum_lands_on_top_edge_and_zero_on_baseline() {
        let scaled = escalar_puntos(&[punto(0.0), punto(50.0)], GEOM);
        assert_eq!(scaled, vec![(10.0, 50.0), (90.0, 10.0)]);
    }

    #[test]
    fn flat_series_stays_on_baseline() {
        let scaled = escalar_puntos(&[punto(0.0), punto(0.0), punto(0.0)], GEOM);
        assert!(scaled.iter().all(|&(_, y)| y == 50.0));
    }

    #[test]
    fn single_point_sits_at_left_padding() {
        let scaled = escalar_puntos(&[punto(5.0)], GEOM);
        assert_eq!(scaled, vec![(10.0, 10.0)]);
    }

    #[test]
    fn polyline_attribute_joins_pairs_with_spaces() {
        let attr = atributo_polyline(&[(10.0, 50.0), (90.0, 10.25)]);
        assert_eq!(attr, "10.0,50.0 90.0,10.2");
    }
}
