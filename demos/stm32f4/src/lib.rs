#![no_std]

pub mod exti_line;
pub mod gpio_port;
