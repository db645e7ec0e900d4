use coursehub_core::app::NativeApp;
use coursehub_core::config::GatewayConfig;
use coursehub_core::error::Result;
use coursehub_core::model::Course;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("usage: {} email password [api-url]", args[0]);
        return Ok(());
    }

    let config = if args.len() > 3 {
        GatewayConfig::new(args[3].clone())
    } else {
        GatewayConfig::from_env()
    };

    let mut app = NativeApp::bootstrap(&config, ".coursehub_token").await?;

    app.start().await;
    if !app.session.session().is_authenticated() {
        app.session.login(&args[1], &args[2]).await?;
    }

    if let Some(user) = app.session.session().user() {
        println!("=====================================");
        println!("signed in: {}", user.name);
        println!("email:     {}", user.email);
        println!("role:      {:?}", user.role);
        println!("=====================================");
    }

    app.refresh().await;

    match app.courses.error() {
        Some(error) => println!("course catalog unavailable: {error}"),
        None => print_catalog(app.courses.visible()),
    }
    match app.content.error() {
        Some(error) => println!("content list unavailable: {error}"),
        None => println!("{} content item(s) loaded", app.content.records().len()),
    }

    Ok(())
}

fn print_catalog(courses: &[Course]) {
    println!("=================course catalog=================");
    for course in courses {
        println!(
            "{:<24}{:<20}{:<14}{:>6.1}",
            course.title, course.instructor, course.category, course.rating
        );
    }
    println!("================================================");
}
