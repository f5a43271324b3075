//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements   | Connects to                     |
//! |-------------|--------------|---------------------------------|
//! | `hardware`  | ButtonPort   | `drivers::button`               |
//! |             | Indicator    | `drivers::indicator`            |
//! |             | PwmOutput    | `drivers::pwm`                  |
//! | `log_sink`  | EventSink    | Serial log output               |
//! | `time`      | DelayNs      | `std::thread::sleep` (host)     |

pub mod hardware;
pub mod log_sink;
pub mod time;
