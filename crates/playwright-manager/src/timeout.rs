// General timeout constants.

use std::time::Duration;

pub const ONE: Duration = Duration::from_secs(1);
pub const TWO: Duration = Duration::from_secs(2);
pub const THREE: Duration = Duration::from_secs(3);
pub const FIVE: Duration = Duration::from_secs(5);
pub const TEN: Duration = Duration::from_secs(10);
pub const TWENTY: Duration = Duration::from_secs(20);
