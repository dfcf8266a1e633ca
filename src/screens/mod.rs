pub mod home;
pub mod instructors;
pub mod departments;
pub mod subjects;
pub mod timetable;
pub mod settings;
pub mod nav_menu;
mod table;

pub use home::home_screen;
pub use instructors::instructors_screen;
pub use departments::departments_screen;
pub use subjects::subjects_screen;
pub use timetable::timetable_screen;
pub use settings::settings_screen;
pub use nav_menu::nav_menu;
