// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::Theme;
use crate::store;
use crate::utils::confirm;

pub fn theme(m: &clap::ArgMatches) -> Result<()> {
    match m.get_one::<String>("value").map(String::as_str) {
        Some("dark") => {
            store::save_theme(Theme::Dark)?;
            println!("Theme set to dark");
        }
        Some("light") => {
            store::save_theme(Theme::Light)?;
            println!("Theme set to light");
        }
        _ => println!("Theme: {}", store::load_theme()?.as_str()),
    }
    Ok(())
}

pub fn reset(m: &clap::ArgMatches) -> Result<()> {
    if !m.get_flag("yes")
        && !confirm("This will delete ALL your transactions and budget settings permanently. Continue?")?
    {
        println!("Aborted");
        return Ok(());
    }
    store::reset()?;
    println!("All data deleted");
    Ok(())
}
