//! Presentational building blocks shared by the app's views.

mod button;
pub use button::{Button, ButtonVariant};

mod card;
pub use card::{Card, CardHeader};

mod field;
pub use field::{Field, SelectField};

mod steps;
pub use steps::StepList;

mod tabs;
pub use tabs::{TabList, TabTrigger};
