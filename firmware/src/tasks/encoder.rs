/*
    Encoder Task
        Runs on the high priority interrupt executor.
        Every edge on either channel reads both levels and feeds the accumulator.
*/

use super::*;

#[embassy_executor::task]
pub async fn encoder_task(r: Encoder0Resources) {
    let mut pin_a = Input::new(r.Encoder_PIN_A, Pull::Up);
    let mut pin_b = Input::new(r.Encoder_PIN_B, Pull::Up);

    ENCODER_0.prime(pin_a.is_high(), pin_b.is_high());
    log::info!("Encoder Ready");

    // Edges that land before the wait is re-armed decode as a double transition and count 0
    loop {
        select(pin_a.wait_for_any_edge(), pin_b.wait_for_any_edge()).await;
        ENCODER_0.on_edge(pin_a.is_high(), pin_b.is_high());
    }
}
