//! Logical key identifiers.

use core::fmt;
use core::str::FromStr;

use logi_hid_expectation_errors::ConfigError;

macro_rules! key_ids {
    ($($variant:ident = $id:literal => $name:literal,)*) => {
        /// Every logical control the firmware recognises.
        ///
        /// Identifiers are stable: keys of the same origin share a block
        /// (`0x00xx` pointer/host, `0x01xx` keyboard page, `0x03xx`
        /// productivity guideline, `0x04xx` gaming guideline).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum KeyId {
            $($variant = $id,)*
        }

        impl KeyId {
            /// Every key in identifier order.
            pub const ALL: &'static [KeyId] = &[$(KeyId::$variant,)*];

            /// Canonical upper-case name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(KeyId::$variant => $name,)*
                }
            }

            pub fn from_id(id: u16) -> Option<Self> {
                match id {
                    $($id => Some(KeyId::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

key_ids! {
        // Pointer buttons, host selectors and mouse-only controls
        LeftButton = 0x0001 => "LEFT_BUTTON",
        RightButton = 0x0002 => "RIGHT_BUTTON",
        MiddleButton = 0x0003 => "MIDDLE_BUTTON",
        Host1 = 0x0004 => "HOST_1",
        Host2 = 0x0005 => "HOST_2",
        Host3 = 0x0006 => "HOST_3",
        BackButton = 0x0007 => "BACK_BUTTON",
        ForwardButton = 0x0008 => "FORWARD_BUTTON",
        SmartShift = 0x0009 => "SMART_SHIFT",
        VirtualGestureButton = 0x000A => "VIRTUAL_GESTURE_BUTTON",
        DpiChange = 0x000B => "DPI_CHANGE",
        DpiSwitch = 0x000C => "DPI_SWITCH",
        AppSwitchGesture = 0x000D => "APP_SWITCH_GESTURE",
        Button1 = 0x000E => "BUTTON_1",
        Button2 = 0x000F => "BUTTON_2",
        Button3 = 0x0010 => "BUTTON_3",
        Button4 = 0x0011 => "BUTTON_4",
        Button5 = 0x0012 => "BUTTON_5",
        Button6 = 0x0013 => "BUTTON_6",
        Button7 = 0x0014 => "BUTTON_7",
        Button8 = 0x0015 => "BUTTON_8",
        Button9 = 0x0016 => "BUTTON_9",
        Button10 = 0x0017 => "BUTTON_10",
        Button11 = 0x0018 => "BUTTON_11",
        Button12 = 0x0019 => "BUTTON_12",
        Button13 = 0x001A => "BUTTON_13",
        Button14 = 0x001B => "BUTTON_14",
        Button15 = 0x001C => "BUTTON_15",
        Button16 = 0x001D => "BUTTON_16",
        LaunchDidot = 0x001E => "LAUNCH_DIDOT",
        EmojiPanel = 0x001F => "EMOJI_PANEL",
        Katahira = 0x0020 => "KATAHIRA",

        // Keyboard page keys, compound shortcuts and layout variants
        KeyboardA = 0x0100 => "KEYBOARD_A",
        KeyboardB = 0x0101 => "KEYBOARD_B",
        KeyboardC = 0x0102 => "KEYBOARD_C",
        KeyboardD = 0x0103 => "KEYBOARD_D",
        KeyboardE = 0x0104 => "KEYBOARD_E",
        KeyboardF = 0x0105 => "KEYBOARD_F",
        KeyboardG = 0x0106 => "KEYBOARD_G",
        KeyboardH = 0x0107 => "KEYBOARD_H",
        KeyboardI = 0x0108 => "KEYBOARD_I",
        KeyboardJ = 0x0109 => "KEYBOARD_J",
        KeyboardK = 0x010A => "KEYBOARD_K",
        KeyboardL = 0x010B => "KEYBOARD_L",
        KeyboardM = 0x010C => "KEYBOARD_M",
        KeyboardN = 0x010D => "KEYBOARD_N",
        KeyboardO = 0x010E => "KEYBOARD_O",
        KeyboardP = 0x010F => "KEYBOARD_P",
        KeyboardQ = 0x0110 => "KEYBOARD_Q",
        KeyboardR = 0x0111 => "KEYBOARD_R",
        KeyboardS = 0x0112 => "KEYBOARD_S",
        KeyboardT = 0x0113 => "KEYBOARD_T",
        KeyboardU = 0x0114 => "KEYBOARD_U",
        KeyboardV = 0x0115 => "KEYBOARD_V",
        KeyboardW = 0x0116 => "KEYBOARD_W",
        KeyboardX = 0x0117 => "KEYBOARD_X",
        KeyboardY = 0x0118 => "KEYBOARD_Y",
        KeyboardZ = 0x0119 => "KEYBOARD_Z",
        Keyboard0 = 0x011A => "KEYBOARD_0",
        Keyboard1 = 0x011B => "KEYBOARD_1",
        Keyboard2 = 0x011C => "KEYBOARD_2",
        Keyboard3 = 0x011D => "KEYBOARD_3",
        Keyboard4 = 0x011E => "KEYBOARD_4",
        Keyboard5 = 0x011F => "KEYBOARD_5",
        Keyboard6 = 0x0120 => "KEYBOARD_6",
        Keyboard7 = 0x0121 => "KEYBOARD_7",
        Keyboard8 = 0x0122 => "KEYBOARD_8",
        Keyboard9 = 0x0123 => "KEYBOARD_9",
        KeyboardF1 = 0x0124 => "KEYBOARD_F1",
        KeyboardF2 = 0x0125 => "KEYBOARD_F2",
        KeyboardF3 = 0x0126 => "KEYBOARD_F3",
        KeyboardF4 = 0x0127 => "KEYBOARD_F4",
        KeyboardF5 = 0x0128 => "KEYBOARD_F5",
        KeyboardF6 = 0x0129 => "KEYBOARD_F6",
        KeyboardF7 = 0x012A => "KEYBOARD_F7",
        KeyboardF8 = 0x012B => "KEYBOARD_F8",
        KeyboardF9 = 0x012C => "KEYBOARD_F9",
        KeyboardF10 = 0x012D => "KEYBOARD_F10",
        KeyboardF11 = 0x012E => "KEYBOARD_F11",
        KeyboardF12 = 0x012F => "KEYBOARD_F12",
        KeyboardF13 = 0x0130 => "KEYBOARD_F13",
        KeyboardF14 = 0x0131 => "KEYBOARD_F14",
        KeyboardF15 = 0x0132 => "KEYBOARD_F15",
        KeyboardF16 = 0x0133 => "KEYBOARD_F16",
        KeyboardF17 = 0x0134 => "KEYBOARD_F17",
        KeyboardF18 = 0x0135 => "KEYBOARD_F18",
        KeyboardF19 = 0x0136 => "KEYBOARD_F19",
        KeyboardF20 = 0x0137 => "KEYBOARD_F20",
        KeyboardF21 = 0x0138 => "KEYBOARD_F21",
        KeyboardF22 = 0x0139 => "KEYBOARD_F22",
        KeyboardF23 = 0x013A => "KEYBOARD_F23",
        KeyboardF24 = 0x013B => "KEYBOARD_F24",
        KeyboardRightArrow = 0x013C => "KEYBOARD_RIGHT_ARROW",
        KeyboardLeftArrow = 0x013D => "KEYBOARD_LEFT_ARROW",
        KeyboardDownArrow = 0x013E => "KEYBOARD_DOWN_ARROW",
        KeyboardUpArrow = 0x013F => "KEYBOARD_UP_ARROW",
        FnKey = 0x0140 => "FN_KEY",
        KeyboardGraveAccentAndTilde = 0x0141 => "KEYBOARD_GRAVE_ACCENT_AND_TILDE",
        KeyboardReturnEnter = 0x0142 => "KEYBOARD_RETURN_ENTER",
        KeyboardBackslashAndPipe = 0x0143 => "KEYBOARD_BACKSLASH_AND_PIPE",
        KeyboardEscape = 0x0144 => "KEYBOARD_ESCAPE",
        KeyboardEqualAndPlus = 0x0145 => "KEYBOARD_EQUAL_AND_PLUS",
        KeyboardBackspace = 0x0146 => "KEYBOARD_BACKSPACE",
        KeyboardDashAndUnderscore = 0x0147 => "KEYBOARD_DASH_AND_UNDERSCORE",
        KeyboardLeftBracketAndBrace = 0x0148 => "KEYBOARD_LEFT_BRACKET_AND_BRACE",
        KeyboardRightBracketAndBrace = 0x0149 => "KEYBOARD_RIGHT_BRACKET_AND_BRACE",
        KeyboardSemicolonAndColon = 0x014A => "KEYBOARD_SEMICOLON_AND_COLON",
        KeyboardApostropheAndQuotationMark = 0x014B => "KEYBOARD_APOSTROPHE_AND_QUOTATION_MARK",
        KeyboardForwardSlashAndQuestionMark = 0x014C => "KEYBOARD_FORWARD_SLASH_AND_QUESTION_MARK",
        KeyboardPeriodAndMore = 0x014D => "KEYBOARD_PERIOD_AND_MORE",
        KeyboardCommaAndLess = 0x014E => "KEYBOARD_COMMA_AND_LESS",
        KeyboardSpaceBar = 0x014F => "KEYBOARD_SPACE_BAR",
        KeyboardNonUsAndTilde = 0x0150 => "KEYBOARD_NON_US_AND_TILDE",
        KeyboardNonUsBackslashAndPipe = 0x0151 => "KEYBOARD_NON_US_BACKSLASH_AND_PIPE",
        KeyboardPrintScreen = 0x0152 => "KEYBOARD_PRINT_SCREEN",
        KeyboardInternational1 = 0x0153 => "KEYBOARD_INTERNATIONAL1",
        KeyboardInternational2 = 0x0154 => "KEYBOARD_INTERNATIONAL2",
        KeyboardInternational3 = 0x0155 => "KEYBOARD_INTERNATIONAL3",
        KeyboardInternational4 = 0x0156 => "KEYBOARD_INTERNATIONAL4",
        KeyboardInternational5 = 0x0157 => "KEYBOARD_INTERNATIONAL5",
        Muhenkan = 0x0158 => "MUHENKAN",
        Henkan = 0x0159 => "HENKAN",
        Yen = 0x015A => "YEN",
        Ro = 0x015B => "RO",
        Kana = 0x015C => "KANA",
        Hanja = 0x015D => "HANJA",
        Hanguel = 0x015E => "HANGUEL",
        KeypadEqual = 0x015F => "KEYPAD_EQUAL",
        KeypadForwardSlash = 0x0160 => "KEYPAD_FORWARD_SLASH",
        KeypadAsterisk = 0x0161 => "KEYPAD_ASTERISK",
        KeypadMinus = 0x0162 => "KEYPAD_MINUS",
        KeypadPlus = 0x0163 => "KEYPAD_PLUS",
        KeypadEnter = 0x0164 => "KEYPAD_ENTER",
        Keypad1AndEnd = 0x0165 => "KEYPAD_1_AND_END",
        Keypad2AndDownArrow = 0x0166 => "KEYPAD_2_AND_DOWN_ARROW",
        Keypad3AndPageDn = 0x0167 => "KEYPAD_3_AND_PAGE_DN",
        Keypad4AndLeftArrow = 0x0168 => "KEYPAD_4_AND_LEFT_ARROW",
        Keypad5 = 0x0169 => "KEYPAD_5",
        Keypad6AndRightArrow = 0x016A => "KEYPAD_6_AND_RIGHT_ARROW",
        Keypad7AndHome = 0x016B => "KEYPAD_7_AND_HOME",
        Keypad8AndUpArrow = 0x016C => "KEYPAD_8_AND_UP_ARROW",
        Keypad9AndPageUp = 0x016D => "KEYPAD_9_AND_PAGE_UP",
        Keypad0AndInsert = 0x016E => "KEYPAD_0_AND_INSERT",
        KeypadPeriodAndDelete = 0x016F => "KEYPAD_PERIOD_AND_DELETE",
        KeyboardPause = 0x0170 => "KEYBOARD_PAUSE",
        KeyboardPower = 0x0171 => "KEYBOARD_POWER",
        KeyboardMenu = 0x0172 => "KEYBOARD_MENU",
        KeyboardStop = 0x0173 => "KEYBOARD_STOP",
        Eject = 0x0174 => "EJECT",
        KeyboardNoUs42 = 0x0175 => "KEYBOARD_NO_US_42",
        KeyboardNoUs1 = 0x0176 => "KEYBOARD_NO_US_1",
        KeyboardNoUs45 = 0x0177 => "KEYBOARD_NO_US_45",
        KeyboardScrollLock = 0x0178 => "KEYBOARD_SCROLL_LOCK",
        PrevTrack = 0x0179 => "PREV_TRACK",
        PlayPause = 0x017A => "PLAY_PAUSE",
        NextTrack = 0x017B => "NEXT_TRACK",
        KeyboardMute = 0x017C => "KEYBOARD_MUTE",
        ContextualMenu = 0x017D => "CONTEXTUAL_MENU",
        KeyboardInsert = 0x017E => "KEYBOARD_INSERT",
        KeyboardDeleteForward = 0x017F => "KEYBOARD_DELETE_FORWARD",
        KeyboardHome = 0x0180 => "KEYBOARD_HOME",
        KeyboardEnd = 0x0181 => "KEYBOARD_END",
        KeyboardPageUp = 0x0182 => "KEYBOARD_PAGE_UP",
        KeyboardPageDown = 0x0183 => "KEYBOARD_PAGE_DOWN",
        KeypadNumLockAndClear = 0x0184 => "KEYPAD_NUM_LOCK_AND_CLEAR",
        KeyboardLeftWinOrOption = 0x0185 => "KEYBOARD_LEFT_WIN_OR_OPTION",
        KeyboardRightWinOrOption = 0x0186 => "KEYBOARD_RIGHT_WIN_OR_OPTION",
        KeyboardLeftAlt = 0x0187 => "KEYBOARD_LEFT_ALT",
        KeyboardRightAlt = 0x0188 => "KEYBOARD_RIGHT_ALT",
        KeyboardLeftShift = 0x0189 => "KEYBOARD_LEFT_SHIFT",
        KeyboardRightShift = 0x018A => "KEYBOARD_RIGHT_SHIFT",
        KeyboardLeftControl = 0x018B => "KEYBOARD_LEFT_CONTROL",
        KeyboardRightControl = 0x018C => "KEYBOARD_RIGHT_CONTROL",
        KeyboardRightControlOrOption = 0x018D => "KEYBOARD_RIGHT_CONTROL_OR_OPTION",
        KeyboardCapsLock = 0x018E => "KEYBOARD_CAPS_LOCK",
        KeyboardTab = 0x018F => "KEYBOARD_TAB",
        ConnectButton = 0x0190 => "CONNECT_BUTTON",
        DesktopSystemSleep = 0x0191 => "DESKTOP_SYSTEM_SLEEP",
        CompoundAltTab = 0x0192 => "COMPOUND_ALT_TAB",
        CompoundCtrlAltDel = 0x0193 => "COMPOUND_CTRL_ALT_DEL",
        CompoundHome = 0x0194 => "COMPOUND_HOME",
        CompoundHomeIso104 = 0x0195 => "COMPOUND_HOME_ISO_104",
        CompoundHomeIso105 = 0x0196 => "COMPOUND_HOME_ISO_105",
        CompoundHomeIso107 = 0x0197 => "COMPOUND_HOME_ISO_107",
        CompoundHomeJis109 = 0x0198 => "COMPOUND_HOME_JIS_109",
        CompoundPaste = 0x0199 => "COMPOUND_PASTE",

        // Productivity keyboard guideline keys
        FnLock = 0x0300 => "FN_LOCK",
        BrightnessDown = 0x0301 => "BRIGHTNESS_DOWN",
        BrightnessUp = 0x0302 => "BRIGHTNESS_UP",
        MissionCtrlTaskView = 0x0303 => "MISSION_CTRL_TASK_VIEW",
        AppSwitchLaunchpad = 0x0304 => "APP_SWITCH_LAUNCHPAD",
        ShowDesktop = 0x0305 => "SHOW_DESKTOP",
        BacklightDown = 0x0306 => "BACKLIGHT_DOWN",
        BacklightUp = 0x0307 => "BACKLIGHT_UP",
        KeyboardVolumeDown = 0x0308 => "KEYBOARD_VOLUME_DOWN",
        KeyboardVolumeUp = 0x0309 => "KEYBOARD_VOLUME_UP",
        Calculator = 0x030A => "CALCULATOR",
        ScreenCapture = 0x030B => "SCREEN_CAPTURE",
        ScreenLock = 0x030C => "SCREEN_LOCK",
        MultiPlatfSearchSpotlight = 0x030D => "MULTI_PLATF_SEARCH_SPOTLIGHT",
        Home = 0x030E => "HOME",
        MultiPlatfBack = 0x030F => "MULTI_PLATF_BACK",
        Dictation = 0x0310 => "DICTATION",
        DoNotDisturb = 0x0311 => "DO_NOT_DISTURB",
        MuteMicrophone = 0x0312 => "MUTE_MICROPHONE",
        LanguageSwitch = 0x0313 => "LANGUAGE_SWITCH",
        LightningPatterns = 0x0314 => "LIGHTNING_PATTERNS",
        FnKeypad7 = 0x0315 => "FN_KEYPAD_7",
        FnKeypad8 = 0x0316 => "FN_KEYPAD_8",
        FnKeypad9 = 0x0317 => "FN_KEYPAD_9",
        FnKeypad4 = 0x0318 => "FN_KEYPAD_4",
        FnKeypad6 = 0x0319 => "FN_KEYPAD_6",
        FnKeypad1 = 0x031A => "FN_KEYPAD_1",
        FnKeypad2 = 0x031B => "FN_KEYPAD_2",
        FnKeypad3 = 0x031C => "FN_KEYPAD_3",
        FnKeypad0 = 0x031D => "FN_KEYPAD_0",
        FnKeypadPeriod = 0x031E => "FN_KEYPAD_PERIOD",
        FnKeypadEnter = 0x031F => "FN_KEYPAD_ENTER",
        FnKeyboardBackspace = 0x0320 => "FN_KEYBOARD_BACKSPACE",
        FnKeyboardU = 0x0321 => "FN_KEYBOARD_U",
        FnKeyboardO = 0x0322 => "FN_KEYBOARD_O",
        FnKeyboardI = 0x0323 => "FN_KEYBOARD_I",
        FnKeyboardC = 0x0324 => "FN_KEYBOARD_C",
        FnKeyboardP = 0x0325 => "FN_KEYBOARD_P",
        FnKeyboardEnter = 0x0326 => "FN_KEYBOARD_ENTER",
        FnKeyboardB = 0x0327 => "FN_KEYBOARD_B",
        FnKeyboardLeftArrow = 0x0328 => "FN_KEYBOARD_LEFT_ARROW",
        FnKeyboardRightArrow = 0x0329 => "FN_KEYBOARD_RIGHT_ARROW",
        FnKeyboardUpArrow = 0x032A => "FN_KEYBOARD_UP_ARROW",
        FnKeyboardDownArrow = 0x032B => "FN_KEYBOARD_DOWN_ARROW",
        FnKeyboardSpaceBar = 0x032C => "FN_KEYBOARD_SPACE_BAR",
        FnKeyboardRightAlt = 0x032D => "FN_KEYBOARD_RIGHT_ALT",
        FnKeyboardRightControl = 0x032E => "FN_KEYBOARD_RIGHT_CONTROL",
        FnKeyboardRightControlOrOption = 0x032F => "FN_KEYBOARD_RIGHT_CONTROL_OR_OPTION",
        SmilingFaceWithHeartShapedEyes = 0x0330 => "SMILING_FACE_WITH_HEART_SHAPED_EYES",
        LoudlyCryingFace = 0x0331 => "LOUDLY_CRYING_FACE",
        EmojiSmiley = 0x0332 => "EMOJI_SMILEY",
        EmojiSmileyWithTears = 0x0333 => "EMOJI_SMILEY_WITH_TEARS",
        Refresh = 0x0334 => "REFRESH",
        OpenNewTab = 0x0335 => "OPEN_NEW_TAB",
        CloseTab = 0x0336 => "CLOSE_TAB",
        Print = 0x0337 => "PRINT",
        OsSettings = 0x0338 => "OS_SETTINGS",
        FnKeyboardG = 0x0339 => "FN_KEYBOARD_G",
        GlobeKey = 0x033A => "GLOBE_KEY",
        BacklightCycling = 0x033B => "BACKLIGHT_CYCLING",
        SmartAction1 = 0x033C => "SMART_ACTION_1",
        SmartAction2 = 0x033D => "SMART_ACTION_2",
        SmartAction3 = 0x033E => "SMART_ACTION_3",
        SmartAction4 = 0x033F => "SMART_ACTION_4",
        HomeAppleSku = 0x0340 => "HOME_APPLE_SKU",
        FwDeleteAppleSku = 0x0341 => "FW_DELETE_APPLE_SKU",
        WindowsCopilot = 0x0342 => "WINDOWS_COPILOT",
        Cut = 0x0343 => "CUT",
        Copy = 0x0344 => "COPY",
        Paste = 0x0345 => "PASTE",

        // Gaming keyboard guideline keys
        BleConnection = 0x0400 => "BLE_CONNECTION",
        Ls2BleConnectionToggle = 0x0401 => "LS2_BLE_CONNECTION_TOGGLE",
        DimmingKey = 0x0402 => "DIMMING_KEY",
        GameModeKey = 0x0403 => "GAME_MODE_KEY",
        Roller0ScrollUp = 0x0404 => "ROLLER0_SCROLL_UP",
        Roller0ScrollDown = 0x0405 => "ROLLER0_SCROLL_DOWN",
        Roller1ScrollUp = 0x0406 => "ROLLER1_SCROLL_UP",
        Roller1ScrollDown = 0x0407 => "ROLLER1_SCROLL_DOWN",
        Ls2Connection = 0x0408 => "LS2_CONNECTION",
        CycleThroughAnimationEffects = 0x0409 => "CYCLE_THROUGH_ANIMATION_EFFECTS",
        CycleThroughColorEffectSubSettings = 0x040A => "CYCLE_THROUGH_COLOR_EFFECT_SUB_SETTINGS",
        FkcToggle = 0x040B => "FKC_TOGGLE",
        OnboardProfile1 = 0x040C => "ONBOARD_PROFILE_1",
        OnboardProfile2 = 0x040D => "ONBOARD_PROFILE_2",
        OnboardProfile3 = 0x040E => "ONBOARD_PROFILE_3",
        OnboardBaseProfile = 0x040F => "ONBOARD_BASE_PROFILE",
        OnboardActuationMode = 0x0410 => "ONBOARD_ACTUATION_MODE",
        OnboardRapidTriggerMode = 0x0411 => "ONBOARD_RAPID_TRIGGER_MODE",
        NoAction = 0x0412 => "NO_ACTION",
        TiltLeft = 0x0413 => "TILT_LEFT",
        TiltRight = 0x0414 => "TILT_RIGHT",
        SelectNextDpi = 0x0415 => "SELECT_NEXT_DPI",
        SelectPrevDpi = 0x0416 => "SELECT_PREV_DPI",
        CycleThroughDpi = 0x0417 => "CYCLE_THROUGH_DPI",
        DefaultDpi = 0x0418 => "DEFAULT_DPI",
        DpiShift = 0x0419 => "DPI_SHIFT",
        SelectNextOnboardProfile = 0x041A => "SELECT_NEXT_ONBOARD_PROFILE",
        SelectPrevOnboardProfile = 0x041B => "SELECT_PREV_ONBOARD_PROFILE",
        CycleThroughOnboardProfile = 0x041C => "CYCLE_THROUGH_ONBOARD_PROFILE",
        GShift = 0x041D => "G_SHIFT",
        BatteryLifeIndicator = 0x041E => "BATTERY_LIFE_INDICATOR",
        SwitchToSpecificOnboardProfile = 0x041F => "SWITCH_TO_SPECIFIC_ONBOARD_PROFILE",
        G1 = 0x0420 => "G_1",
        G2 = 0x0421 => "G_2",
        G3 = 0x0422 => "G_3",
        G4 = 0x0423 => "G_4",
        G5 = 0x0424 => "G_5",
        G6 = 0x0425 => "G_6",
        G7 = 0x0426 => "G_7",
        G8 = 0x0427 => "G_8",
        G9 = 0x0428 => "G_9",
}

impl KeyId {
    pub const fn id(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyId::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::unknown_name("key", s))
    }
}
