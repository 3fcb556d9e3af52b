pub mod alphabet;
pub mod counting;
pub mod home;
pub mod images;
pub mod login;
pub mod math;
pub mod parental;
pub mod profile;
pub mod sentences;

pub use alphabet::AlphabetScreen;
pub use counting::CountingScreen;
pub use home::HomeScreen;
pub use images::ImageScreen;
pub use login::LoginScreen;
pub use math::MathScreen;
pub use parental::ParentalScreen;
pub use profile::ProfileScreen;
pub use sentences::SentenceScreen;

use crate::catalog::ModuleId;

/// What a screen wants the event loop to do after handling one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Stay,
    GoHome,
    OpenModule(ModuleId),
    OpenProfile,
    OpenParental,
    LoggedIn,
    LoggedOut,
    Quit,
}

/// The active screen. Navigating away drops the old state, which also
/// releases any pending reveal deadline it held.
pub enum Screen {
    Login(LoginScreen),
    Home(HomeScreen),
    Alphabet(AlphabetScreen),
    Counting(CountingScreen),
    Math(MathScreen),
    Images(ImageScreen),
    Sentences(SentenceScreen),
    Profile(ProfileScreen),
    Parental(ParentalScreen),
}
