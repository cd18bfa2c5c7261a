mod status;
pub use status::{FormStatus, StatusLine};

mod home;
pub use home::{ChatBubble, HomeView};

mod feedback;
pub use feedback::{FeedbackItem, FeedbackView};

mod about;
pub use about::AboutView;

mod auth;
pub use auth::{AuthTab, AuthView};

mod main_content;
pub use main_content::MainContent;
