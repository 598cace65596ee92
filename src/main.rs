use theme_dropdown::app::App;
use theme_dropdown::config;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level())
        .expect("logger is initialised once at startup");
    leptos::mount::mount_to_body(App);
}
