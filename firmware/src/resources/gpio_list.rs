/*
    Resource Allocation Module
*/

use super::*;

assign_resources! {
    motor_0: Motor0Resources {
        Motor_PWM_CCW_PIN: PIN_14,
        Motor_PWM_CW_PIN: PIN_15,
        SLICE: PWM_SLICE7,
    },

    encoder_0: Encoder0Resources {
        Encoder_PIN_A: PIN_6,
        Encoder_PIN_B: PIN_7,
    },

    // Active low, internal pull-up
    reset_button: ResetButtonResources {
        Reset_PIN: PIN_0,
    },

    usb: UsbResources {
        USB: USB,
    },
}

bind_interrupts!(pub struct Irqs {
    USBCTRL_IRQ => UsbInterruptHandler<peripherals::USB>;
});
