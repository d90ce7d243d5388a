//! The compiled-in defaults table.
//!
//! Declaration order is the order of the setup menu and of the saved config
//! file. Headers start a new section.

use crate::field;

use super::defaults::{
    MESSAGE_TIMER_MS, SAMPLERATE, SAMPLERATE_MAX, SAMPLERATE_MIN, SCREENBLOCKS, VOLUME,
    VOLUME_MAX, key,
};
use super::entry::DefaultEntry;
use super::menu::SetupScreen;
use super::value::{Bounds, InputBinding};

type E = DefaultEntry;

/// Every configuration entry the engine knows about.
pub static DEFAULT_TABLE: &[DefaultEntry] = &[
    E::header("Misc settings"),
    E::integer("default_skill", field!(misc.default_skill), 3, Bounds::new(1, 5))
        .with_menu(SetupScreen::General, 0),
    E::string("player_name", field!(misc.player_name), "Player")
        .with_menu(SetupScreen::General, 0),
    E::integer("demo_insurance", field!(misc.demo_insurance), 2, Bounds::new(0, 2))
        .with_menu(SetupScreen::General, 1),
    E::hex("hud_flags", field!(misc.hud_flags), 0x1f, Bounds::new(0, 0xff))
        .with_menu(SetupScreen::Status, 0),
    E::array("autoload", field!(misc.autoload), &[]),

    E::header("Files"),
    E::string("wadfile_1", field!(files.wadfiles[0]), "").with_ident(1),
    E::string("wadfile_2", field!(files.wadfiles[1]), "").with_ident(2),
    E::string("wadfile_3", field!(files.wadfiles[2]), "").with_ident(3),
    E::string("wadfile_4", field!(files.wadfiles[3]), "").with_ident(4),
    E::string("wadfile_5", field!(files.wadfiles[4]), "").with_ident(5),
    E::string("wadfile_6", field!(files.wadfiles[5]), "").with_ident(6),
    E::string("wadfile_7", field!(files.wadfiles[6]), "").with_ident(7),
    E::string("wadfile_8", field!(files.wadfiles[7]), "").with_ident(8),
    E::string("dehfile_1", field!(files.dehfiles[0]), "").with_ident(1),
    E::string("dehfile_2", field!(files.dehfiles[1]), "").with_ident(2),
    E::string("dehfile_3", field!(files.dehfiles[2]), "").with_ident(3),
    E::string("dehfile_4", field!(files.dehfiles[3]), "").with_ident(4),

    E::header("Sound settings"),
    E::integer(
        "samplerate",
        field!(sound.samplerate),
        SAMPLERATE,
        Bounds::new(SAMPLERATE_MIN, SAMPLERATE_MAX),
    ),
    E::integer("sfx_volume", field!(sound.sfx_volume), VOLUME, Bounds::new(0, VOLUME_MAX))
        .with_menu(SetupScreen::General, 2),
    E::integer("music_volume", field!(sound.music_volume), VOLUME, Bounds::new(0, VOLUME_MAX))
        .with_menu(SetupScreen::General, 2),
    E::integer("snd_channels", field!(sound.channels), 8, Bounds::new(1, 32))
        .with_menu(SetupScreen::General, 2),
    E::boolean("pitched_sounds", field!(sound.pitched_sounds), false)
        .with_menu(SetupScreen::General, 2),

    E::header("Video settings"),
    E::integer("screenblocks", field!(video.screenblocks), SCREENBLOCKS, Bounds::new(3, 11)),
    E::integer("usegamma", field!(video.usegamma), 0, Bounds::new(0, 4))
        .with_menu(SetupScreen::General, 3),
    E::boolean("fullscreen", field!(video.fullscreen), true)
        .with_menu(SetupScreen::General, 3),
    E::integer("screen_width", field!(video.screen_width), 640, Bounds::new(320, 7680)),
    E::integer("screen_height", field!(video.screen_height), 480, Bounds::new(200, 4320)),
    E::boolean("uncapped_framerate", field!(video.uncapped_framerate), true)
        .with_menu(SetupScreen::General, 3),

    E::header("Mouse settings"),
    E::boolean("use_mouse", field!(mouse.use_mouse), true)
        .with_menu(SetupScreen::General, 4),
    E::integer("mouse_sensitivity_horiz", field!(mouse.sensitivity_horiz), 10, Bounds::new(0, 100))
        .with_menu(SetupScreen::General, 4),
    E::integer("mouse_sensitivity_vert", field!(mouse.sensitivity_vert), 10, Bounds::new(0, 100))
        .with_menu(SetupScreen::General, 4),
    E::integer("mouse_acceleration", field!(mouse.acceleration), 10, Bounds::UNBOUNDED),

    E::header("Key bindings"),
    E::input("key_up", field!(keys.up), InputBinding::key(key::UPARROW))
        .with_menu(SetupScreen::Keys, 0),
    E::input("key_down", field!(keys.down), InputBinding::key(key::DOWNARROW))
        .with_menu(SetupScreen::Keys, 0),
    E::input("key_left", field!(keys.left), InputBinding::key(key::LEFTARROW))
        .with_menu(SetupScreen::Keys, 0),
    E::input("key_right", field!(keys.right), InputBinding::key(key::RIGHTARROW))
        .with_menu(SetupScreen::Keys, 0),
    E::input("key_fire", field!(keys.fire), InputBinding::new(key::RCTRL, 0, 0))
        .with_menu(SetupScreen::Keys, 1),
    E::input("key_use", field!(keys.use_action), InputBinding::new(key::SPACE, InputBinding::UNSET, 1))
        .with_menu(SetupScreen::Keys, 1),
    E::input("key_strafe", field!(keys.strafe), InputBinding::new(key::RALT, 1, 3))
        .with_menu(SetupScreen::Keys, 1),
    E::input("key_speed", field!(keys.speed), InputBinding::new(key::RSHIFT, InputBinding::UNSET, 2))
        .with_menu(SetupScreen::Keys, 1),
    E::input("key_map", field!(keys.automap), InputBinding::key(key::TAB))
        .with_menu(SetupScreen::Keys, 2),

    E::header("Automap settings"),
    E::boolean("map_grid", field!(automap.grid), false).with_menu(SetupScreen::Automap, 0),
    E::color("mapcolor_back", field!(automap.color_back), 247).with_menu(SetupScreen::Automap, 1),
    E::color("mapcolor_grid", field!(automap.color_grid), 104).with_menu(SetupScreen::Automap, 1),
    E::color("mapcolor_wall", field!(automap.color_wall), 23).with_menu(SetupScreen::Automap, 1),
    E::color("mapcolor_fchg", field!(automap.color_floor_change), 55)
        .with_menu(SetupScreen::Automap, 1),
    E::color("mapcolor_cchg", field!(automap.color_ceiling_change), 215)
        .with_menu(SetupScreen::Automap, 1),
    E::color("mapcolor_me", field!(automap.color_player), 112).with_menu(SetupScreen::Automap, 1),

    E::header("Messages and chat"),
    E::boolean("show_messages", field!(messages.show_messages), true)
        .with_menu(SetupScreen::Messages, 0),
    E::integer("message_timer", field!(messages.message_timer), MESSAGE_TIMER_MS, Bounds::UNBOUNDED)
        .with_menu(SetupScreen::Messages, 0),
    E::color("hudcolor_mesg", field!(messages.message_color), 176)
        .with_menu(SetupScreen::Messages, 1),
    E::string("chatmacro0", field!(messages.chat_macros[0]), "No").with_menu(SetupScreen::Chat, 0),
    E::string("chatmacro1", field!(messages.chat_macros[1]), "I'm ready to kick butt!")
        .with_menu(SetupScreen::Chat, 0).with_ident(1),
    E::string("chatmacro2", field!(messages.chat_macros[2]), "I'm OK.")
        .with_menu(SetupScreen::Chat, 0).with_ident(2),
    E::string("chatmacro3", field!(messages.chat_macros[3]), "I'm not looking too good!")
        .with_menu(SetupScreen::Chat, 0).with_ident(3),
    E::string("chatmacro4", field!(messages.chat_macros[4]), "Help!")
        .with_menu(SetupScreen::Chat, 0).with_ident(4),
    E::string("chatmacro5", field!(messages.chat_macros[5]), "You suck!")
        .with_menu(SetupScreen::Chat, 0).with_ident(5),
    E::string("chatmacro6", field!(messages.chat_macros[6]), "Next time, scumbag...")
        .with_menu(SetupScreen::Chat, 0).with_ident(6),
    E::string("chatmacro7", field!(messages.chat_macros[7]), "Come here!")
        .with_menu(SetupScreen::Chat, 0).with_ident(7),
    E::string("chatmacro8", field!(messages.chat_macros[8]), "I'll take care of it.")
        .with_menu(SetupScreen::Chat, 0).with_ident(8),
    E::string("chatmacro9", field!(messages.chat_macros[9]), "Yes")
        .with_menu(SetupScreen::Chat, 0).with_ident(9),
];
