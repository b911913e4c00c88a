// SPDX-License-Identifier: MPL-2.0
use iced_marquee::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        schedule_path: args
            .opt_value_from_str::<_, PathBuf>("--schedule")
            .unwrap_or(None),
        gallery_dir: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
    };

    app::run(flags)
}
