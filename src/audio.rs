//! Best-effort feedback tones over Web Audio. A shared context is created on
//! first use and cached; every failure is swallowed so the games keep working
//! without sound.

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

thread_local! {
    static AUDIO_CONTEXT: std::cell::RefCell<Option<AudioContext>> =
        std::cell::RefCell::new(None);
}

fn with_context<F>(build: F)
where
    F: FnOnce(&AudioContext) -> Result<(), JsValue>,
{
    AUDIO_CONTEXT.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = AudioContext::new().ok();
        }
        if let Some(ctx) = slot.as_ref() {
            let _ = build(ctx);
        }
    });
}

/// Ascending C5 to E5 chirp. Played for a new best score or a strong finish.
pub fn play_success() {
    with_context(|ctx| {
        let now = ctx.current_time();
        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        osc.set_type(OscillatorType::Sine);
        osc.frequency().set_value_at_time(523.25, now)?;
        osc.frequency().set_value_at_time(659.25, now + 0.1)?;

        let g = gain.gain();
        g.set_value_at_time(0.0, now)?;
        g.linear_ramp_to_value_at_time(0.15, now + 0.01)?;
        g.linear_ramp_to_value_at_time(0.1, now + 0.1)?;
        g.linear_ramp_to_value_at_time(0.0, now + 0.25)?;

        osc.start_with_when(now)?;
        osc.stop_with_when(now + 0.25)?;
        Ok(())
    });
}

/// Descending triangle slide, G4 down to G3. Played on a failed attempt.
pub fn play_error() {
    with_context(|ctx| {
        let now = ctx.current_time();
        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        osc.set_type(OscillatorType::Triangle);
        osc.frequency().set_value_at_time(392.0, now)?;
        osc.frequency().linear_ramp_to_value_at_time(196.0, now + 0.3)?;

        let g = gain.gain();
        g.set_value_at_time(0.0, now)?;
        g.linear_ramp_to_value_at_time(0.1, now + 0.01)?;
        g.linear_ramp_to_value_at_time(0.05, now + 0.15)?;
        g.linear_ramp_to_value_at_time(0.0, now + 0.3)?;

        osc.start_with_when(now)?;
        osc.stop_with_when(now + 0.3)?;
        Ok(())
    });
}

/// Very short quiet tick for minor interactions.
pub fn play_click() {
    with_context(|ctx| {
        let now = ctx.current_time();
        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        osc.set_type(OscillatorType::Sine);
        osc.frequency().set_value_at_time(800.0, now)?;

        let g = gain.gain();
        g.set_value_at_time(0.05, now)?;
        g.linear_ramp_to_value_at_time(0.0, now + 0.05)?;

        osc.start_with_when(now)?;
        osc.stop_with_when(now + 0.05)?;
        Ok(())
    });
}
