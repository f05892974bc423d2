//! "The Lantern Crossroads", the adventure that ships with the engine.
//!
//! Every path eventually leads back to the crossroads; the ending scene
//! offers a fresh start rather than a game-over.

use crate::scene::{Choice, Effect, Scene, SceneGraph};

/// Title of the built-in adventure.
pub const TITLE: &str = "The Lantern Crossroads";

/// Entry scene of the built-in adventure.
pub const START_SCENE: &str = "crossroads";

/// Build the built-in adventure.
pub fn lantern_crossroads() -> SceneGraph {
    SceneGraph::assemble(TITLE, START_SCENE.to_string(), scenes())
}

fn scenes() -> Vec<Scene> {
    vec![
        Scene::new(
            START_SCENE,
            "The Lantern Crossroads",
            "Rain hisses on the cobbles where three roads meet beneath a leaning signpost. \
             A weathered map is nailed to the post, and a lantern gutters in the window \
             of a small roadside shrine.",
        )
        .with_choice(Choice::new(
            "read_map",
            "Read the weathered map nailed to the signpost",
            "map",
        ))
        .with_choice(Choice::new(
            "visit_shrine",
            "Step inside the roadside shrine",
            "shrine",
        ))
        .with_choice(Choice::new(
            "north_road",
            "Follow the north road toward the hills",
            "hills",
        )),
        Scene::new(
            "map",
            "The Weathered Map",
            "Faded ink traces the three roads. Beside the old watchtower someone has drawn \
             a red circle and written: the bell still rings for those who listen.",
        )
        .with_choice(
            Choice::new(
                "tuck_map",
                "Tuck the map into your coat and set out for the watchtower",
                "watchtower",
            )
            .with_effect(Effect::journal(
                "The map marks the old watchtower with a red circle: \
                 the bell still rings for those who listen.",
            ))
            .with_effect(Effect::item("weathered map")),
        )
        .with_choice(Choice::new(
            "leave_map",
            "Leave the map where it hangs and look around the crossroads again",
            START_SCENE,
        )),
        Scene::new(
            "shrine",
            "The Roadside Shrine",
            "Candle stubs crowd a stone ledge. In the offering bowl a tarnished silver key \
             lies among copper coins.",
        )
        .with_choice(
            Choice::new(
                "take_key",
                "Pocket the silver key from the offering bowl",
                START_SCENE,
            )
            .with_effect(Effect::item("silver key"))
            .with_effect(Effect::journal(
                "Took a silver key from the shrine's offering bowl.",
            )),
        )
        .with_choice(
            Choice::new("leave_coin", "Leave a coin and pray for safe roads", START_SCENE)
                .with_effect(Effect::journal(
                    "Left a coin at the shrine and prayed for safe roads.",
                )),
        ),
        Scene::new(
            "hills",
            "The Hill Road",
            "The road climbs through wet heather. Above, the broken outline of a watchtower \
             stands against the clouds, and somewhere a sheep bell clanks.",
        )
        .with_choice(Choice::new(
            "climb_path",
            "Climb the switchback path up to the watchtower",
            "watchtower",
        ))
        .with_choice(Choice::new(
            "turn_back",
            "Turn back down to the crossroads",
            START_SCENE,
        )),
        Scene::new(
            "watchtower",
            "The Old Watchtower",
            "An iron-bound door guards the base of the tower. High above, a green bronze \
             bell hangs silent in its cage.",
        )
        .with_choice(
            Choice::new("unlock_door", "Unlock the iron door", "bell_chamber")
                .with_effect(Effect::journal("Opened the watchtower door.")),
        )
        .with_choice(Choice::new(
            "ring_bell",
            "Pull the frayed rope and ring the bell",
            "watchman",
        ))
        .with_choice(Choice::new(
            "descend",
            "Descend the hill to the crossroads",
            START_SCENE,
        )),
        Scene::new(
            "bell_chamber",
            "The Bell Chamber",
            "Dust swirls in the lamplight. On a table sits a lantern of blue glass whose \
             flame burns without oil.",
        )
        .with_choice(
            Choice::new("claim_lantern", "Claim the blue glass lantern", "dawn")
                .with_effect(Effect::item("blue glass lantern"))
                .with_effect(Effect::journal(
                    "Claimed the everburning blue lantern from the bell chamber.",
                )),
        )
        .with_choice(Choice::new(
            "leave_chamber",
            "Leave the chamber undisturbed",
            "watchtower",
        )),
        Scene::new(
            "watchman",
            "The Watchman's Ghost",
            "The bell's note hangs in the air. A pale watchman steps out of the mist and \
             asks whether you have come to keep the light.",
        )
        .with_choice(
            Choice::new(
                "accept_watch",
                "Promise to keep the light and follow him inside",
                "bell_chamber",
            )
            .with_effect(Effect::journal(
                "Promised the ghostly watchman to keep the light.",
            )),
        )
        .with_choice(Choice::new(
            "flee",
            "Flee down the hill to the crossroads",
            START_SCENE,
        )),
        Scene::new(
            "dawn",
            "Dawn over the Crossroads",
            "You carry the blue lantern down to the crossroads as the sky pales. Travelers \
             will find their way here now. Your tale is done, for now.",
        )
        .with_choice(Choice::new(
            "begin_again",
            "Begin a new journey at the crossroads",
            START_SCENE,
        )),
    ]
}
