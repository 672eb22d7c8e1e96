use dictation_analytics::analytics::Analytics;
use dictation_analytics::cli::Args;
use dictation_analytics::dashboard::{DashboardState, DashboardView};
use dictation_analytics::date_provider::{DateProvider, FixedDateProvider, SystemDateProvider};
use dictation_analytics::report;
use dictation_analytics::store_factory::{StoreConfig, StoreFactory};
use log::debug;

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse_args()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let date_provider: Box<dyn DateProvider> = match args.validate_today()? {
        Some(date) => Box::new(FixedDateProvider::new(date)),
        None => Box::new(SystemDateProvider),
    };
    let now = date_provider.get_current_time();

    let store = StoreFactory::create(&StoreConfig::from_args(&args))?;
    let analytics = Analytics::new(&store);

    let mut state = DashboardState::new();
    state.set_params(args.query_params()?);
    state.switch_view(args.view);
    debug!("Dashboard state: {:?}", state);

    if let Some(word) = &args.word {
        state.open_word(&store, word)?;
        if let Some(record) = state.selected_record(&store) {
            print!("{}", report::render_word_detail(record, now));
        }
        return Ok(());
    }

    match state.active_view() {
        DashboardView::Overview => {
            let stats = if args.derived {
                analytics.derived_stats(date_provider.today())
            } else {
                store.overall_stats().clone()
            };
            print!("{}", report::render_overview(&stats, now)?);
        }
        DashboardView::Words => {
            let visible = state.visible_words(&store);
            print!(
                "{}",
                report::render_word_table(&visible, store.words().len(), now)
            );
            println!();
            println!("Categories: {}", analytics.categories().join(", "));
        }
        DashboardView::Lessons => {
            print!("{}", report::render_lesson_table(store.lessons())?);
        }
    }

    Ok(())
}
