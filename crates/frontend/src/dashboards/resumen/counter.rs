use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const DURACION_MS: u32 = 900;
const PASO_MS: u32 = 30;

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Value shown `elapsed_ms` into an animation towards `objetivo`.
pub fn valor_en_instante(objetivo: u64, elapsed_ms: u32, duracion_ms: u32) -> u64 {
    if duracion_ms == 0 || elapsed_ms >= duracion_ms {
        return objetivo;
    }
    let t = f64::from(elapsed_ms) / f64::from(duracion_ms);
    (objetivo as f64 * ease_out_cubic(t)).round() as u64
}

/// Stat-card number that counts up towards its target.
///
/// Each change of the target starts a fresh animation; a newer animation
/// cancels any still-running older one instead of fighting it for the signal.
#[component]
pub fn AnimatedCounter(#[prop(into)] target: Signal<u64>) -> impl IntoView {
    let shown = RwSignal::new(0_u64);
    let generation = StoredValue::new(0_u64);

    Effect::new(move |_| {
        let objetivo = target.get();
        let my_gen = generation.get_value() + 1;
        generation.set_value(my_gen);

        spawn_local(async move {
            let mut elapsed = 0;
            while elapsed < DURACION_MS {
                TimeoutFuture::new(PASO_MS).await;
                if generation.get_value() != my_gen {
                    return;
                }
                elapsed += PASO_MS;
                shown.set(valor_en_instante(objetivo, elapsed, DURACION_MS));
            }
        });
    });

    view! { <span class="stat-card__value">{move || shown.get()}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_bounded() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn easing_decelerates() {
        // More than half of the distance is covered in the first half.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn counter_reaches_target_exactly() {
        assert_eq!(valor_en_instante(48, 900, 900), 48);
        assert_eq!(valor_en_instante(48, 1200, 900), 48);
    }

    #[test]
    fn counter_never_overshoots() {
        for elapsed in (0..=900).step_by(30) {
            assert!(valor_en_instante(1000, elapsed, 900) <= 1000);
        }
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(valor_en_instante(7, 0, 0), 7);
    }
}
