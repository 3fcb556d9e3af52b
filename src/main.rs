use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use learning_fun_galaxy::content::ContentBank;
use learning_fun_galaxy::logger;
use learning_fun_galaxy::screens::{
    AlphabetScreen, CountingScreen, HomeScreen, ImageScreen, LoginScreen, MathScreen,
    ParentalScreen, ProfileScreen, Screen, ScreenEvent, SentenceScreen,
};
use learning_fun_galaxy::speech::{spawn_speech_worker, SpeechHandle};
use learning_fun_galaxy::store::SessionStore;
use learning_fun_galaxy::ui::{self, Palette};
use learning_fun_galaxy::ModuleId;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for a key before running a timer tick anyway. Keeps
/// the reveal transitions moving when no keys are pressed.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    logger::init();
    let bank = ContentBank::load()?;
    let (speech, _speech_worker) = spawn_speech_worker();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &bank, &speech);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    bank: &ContentBank,
    speech: &SpeechHandle,
) -> io::Result<()> {
    let mut store = SessionStore::new();
    let mut screen = Screen::Login(LoginScreen::new());

    loop {
        let palette = Palette::for_theme(store.theme);
        terminal.draw(|f| draw(f, &palette, &screen, &store))?;

        let mut outcome = ScreenEvent::Stay;
        if event::poll(TICK_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            outcome = handle_input(&mut screen, key, Instant::now(), &mut store, speech);
        }
        tick(&mut screen, Instant::now(), &mut store);

        match outcome {
            ScreenEvent::Stay => {}
            ScreenEvent::Quit => break,
            ScreenEvent::GoHome | ScreenEvent::LoggedIn => {
                screen = Screen::Home(HomeScreen::new());
            }
            ScreenEvent::LoggedOut => screen = Screen::Login(LoginScreen::new()),
            ScreenEvent::OpenModule(id) => {
                screen = open_module(id, bank, speech);
            }
            ScreenEvent::OpenProfile => screen = Screen::Profile(ProfileScreen::new(&store)),
            ScreenEvent::OpenParental => screen = Screen::Parental(ParentalScreen::new()),
        }
    }
    Ok(())
}

fn open_module(id: ModuleId, bank: &ContentBank, speech: &SpeechHandle) -> Screen {
    match id {
        ModuleId::Alphabet => {
            speech.say("Let's learn the alphabet!");
            Screen::Alphabet(AlphabetScreen::new(bank.letters.clone()))
        }
        ModuleId::Counting => {
            speech.say("Let's count together!");
            Screen::Counting(CountingScreen::new())
        }
        ModuleId::Math => {
            speech.say("Time for some math!");
            Screen::Math(MathScreen::new(&mut rand::thread_rng()))
        }
        ModuleId::ImageRecognition => {
            speech.say("What do you see?");
            Screen::Images(ImageScreen::new(&bank.image_questions))
        }
        ModuleId::SentenceFormation => {
            speech.say("Let's build sentences!");
            Screen::Sentences(SentenceScreen::new(
                bank.sentence_levels.clone(),
                &mut rand::thread_rng(),
            ))
        }
    }
}

fn draw(f: &mut Frame, palette: &Palette, screen: &Screen, store: &SessionStore) {
    match screen {
        Screen::Login(s) => ui::draw_login(f, palette, s),
        Screen::Home(s) => ui::draw_home(f, palette, s, store),
        Screen::Alphabet(s) => ui::draw_alphabet(f, palette, s),
        Screen::Counting(s) => ui::draw_counting(f, palette, s),
        Screen::Math(s) => ui::draw_math(f, palette, s),
        Screen::Images(s) => ui::draw_images(f, palette, s),
        Screen::Sentences(s) => ui::draw_sentences(f, palette, s),
        Screen::Profile(s) => ui::draw_profile(f, palette, s, store),
        Screen::Parental(s) => ui::draw_parental(f, palette, s, store),
    }
}

fn handle_input(
    screen: &mut Screen,
    key: crossterm::event::KeyEvent,
    now: Instant,
    store: &mut SessionStore,
    speech: &SpeechHandle,
) -> ScreenEvent {
    match screen {
        Screen::Login(s) => s.handle_input(key, store),
        Screen::Home(s) => s.handle_input(key, store),
        Screen::Alphabet(s) => s.handle_input(key, now, speech),
        Screen::Counting(s) => s.handle_input(key, now, speech),
        Screen::Math(s) => s.handle_input(key, now, speech),
        Screen::Images(s) => s.handle_input(key, now, speech),
        Screen::Sentences(s) => s.handle_input(key, now, speech),
        Screen::Profile(s) => s.handle_input(key, store),
        Screen::Parental(s) => s.handle_input(key, store),
    }
}

fn tick(screen: &mut Screen, now: Instant, store: &mut SessionStore) {
    match screen {
        Screen::Alphabet(s) => s.tick(now, store),
        Screen::Counting(s) => s.tick(now, store),
        Screen::Math(s) => s.tick(now, store),
        Screen::Images(s) => s.tick(now, store),
        Screen::Sentences(s) => s.tick(now, store),
        _ => {}
    }
}
