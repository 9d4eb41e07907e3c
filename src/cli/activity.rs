use crate::{activity::Activity, info, warning};

pub fn activity(label: String) {
    let activity = Activity::from(label.as_str());
    if activity == Activity::Other {
        warning!("Unknown activity '{}', using the default genre.", label);
    }
    info!("{}", activity.genre());
}
