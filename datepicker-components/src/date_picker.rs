//! Single-entry date picker dispatching to one of four mode popovers.
//!
//! ## Usage
//!
//! Build a [`DatePicker`] from [`DatePickerArgs`], forward clicks on the
//! trigger to [`DatePicker::click_trigger`] and popover interactions to
//! [`DatePicker::dispatch`]. Draw from [`DatePicker::view`].
use datepicker_foundation::CalendarDate;
use derive_setters::Setters;
use tracing::{debug, trace, warn};

use crate::{
    callback::CallbackWith,
    display::{self, ModeKind},
    locale::PickerLocale,
    popover::{
        PickerMsg, Popover, PopoverAction,
        date_range::{DateRangeArgs, DateRangePopover, DateRangeView},
        full_range::{FullRangeArgs, FullRangePopover, FullRangeView},
        single_day::{SingleDayArgs, SingleDayPopover, SingleDayView},
        single_month::{SingleMonthArgs, SingleMonthPopover, SingleMonthView},
    },
    value::RangeValue,
};

/// Picker mode together with its value and change handler.
///
/// Each mode carries a handler typed for its own value, so a single-day host
/// can never be handed a range.
#[derive(Debug, Clone, PartialEq)]
pub enum DatePickerMode {
    /// One calendar day, `YYYY-MM-DD` or `YYYY-MM-DDTHH:mm:ss`.
    SingleDay {
        /// Current value.
        value: Option<String>,
        /// Whether a time input is shown and emitted.
        include_time: bool,
        /// Called with every emitted value.
        on_change: CallbackWith<String>,
    },
    /// One month, emitted as the ISO first instant of the month.
    SingleMonth {
        /// Current value.
        value: Option<String>,
        /// Called with every emitted value.
        on_change: CallbackWith<String>,
    },
    /// A range of whole days.
    DateRange {
        /// Current value.
        value: Option<RangeValue>,
        /// Called with every emitted value.
        on_change: CallbackWith<RangeValue>,
    },
    /// A range of instants.
    Full {
        /// Current value.
        value: Option<RangeValue>,
        /// Called with every emitted value.
        on_change: CallbackWith<RangeValue>,
    },
}

impl Default for DatePickerMode {
    fn default() -> Self {
        DatePickerMode::SingleDay {
            value: None,
            include_time: false,
            on_change: CallbackWith::default(),
        }
    }
}

impl DatePickerMode {
    /// Returns the mode without its value.
    pub fn kind(&self) -> ModeKind {
        match self {
            DatePickerMode::SingleDay { .. } => ModeKind::SingleDay,
            DatePickerMode::SingleMonth { .. } => ModeKind::SingleMonth,
            DatePickerMode::DateRange { .. } => ModeKind::DateRange,
            DatePickerMode::Full { .. } => ModeKind::Full,
        }
    }
}

/// Horizontal sizing of the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthType {
    /// As wide as the trigger text.
    #[default]
    Fit,
    /// Fills the available width.
    Full,
}

/// Configuration options for [`DatePicker`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct DatePickerArgs {
    /// Mode, value and change handler.
    pub mode: DatePickerMode,
    /// Label shown above the trigger.
    #[setters(strip_option, into)]
    pub label: Option<String>,
    /// Trigger text while no readable value is set.
    #[setters(strip_option, into)]
    pub placeholder: Option<String>,
    /// A disabled picker never opens.
    pub disabled: bool,
    /// Horizontal sizing of the trigger.
    pub width: WidthType,
    /// Extra style class passed through to the renderer.
    #[setters(strip_option, into)]
    pub class_name: Option<String>,
    /// Open the popover as soon as the picker is built.
    pub default_open: bool,
    /// Language of every label.
    pub locale: PickerLocale,
    /// Reference "now" used for today highlights and fallback seeds.
    pub now: CalendarDate,
}

impl Default for DatePickerArgs {
    fn default() -> Self {
        Self {
            mode: DatePickerMode::default(),
            label: None,
            placeholder: None,
            disabled: false,
            width: WidthType::default(),
            class_name: None,
            default_open: false,
            locale: PickerLocale::default(),
            now: CalendarDate::now(),
        }
    }
}

/// What happened to a message passed to [`DatePicker::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No popover was open.
    Ignored,
    /// The popover stayed open without emitting.
    Kept,
    /// A value was emitted and the popover stayed open.
    Emitted,
    /// A value was emitted and the popover closed.
    Committed,
    /// The popover closed without emitting.
    Dismissed,
}

impl<V> From<&PopoverAction<V>> for DispatchOutcome {
    fn from(action: &PopoverAction<V>) -> Self {
        match action {
            PopoverAction::None => DispatchOutcome::Kept,
            PopoverAction::Emit(_) => DispatchOutcome::Emitted,
            PopoverAction::Commit(_) => DispatchOutcome::Committed,
            PopoverAction::Dismiss => DispatchOutcome::Dismissed,
        }
    }
}

/// Trigger button contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    /// Formatted value or placeholder.
    pub text: String,
    /// Whether `text` is a placeholder.
    pub is_placeholder: bool,
    /// Whether the trigger ignores clicks.
    pub disabled: bool,
    /// Whether the popover is open.
    pub is_open: bool,
    /// Horizontal sizing.
    pub width: WidthType,
    /// Extra style class.
    pub class_name: Option<String>,
}

/// The mounted popover's view.
#[derive(Debug, Clone, PartialEq)]
pub enum PopoverView {
    /// Single-day calendar.
    SingleDay(SingleDayView),
    /// Month and year grids.
    SingleMonth(SingleMonthView),
    /// Date-range calendar with text fields.
    DateRange(DateRangeView),
    /// Full-range calendar with date and time fields.
    Full(FullRangeView),
}

/// What a date picker draws.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePickerView {
    /// Label above the trigger.
    pub label: Option<String>,
    /// Trigger contents.
    pub trigger: TriggerView,
    /// Popover contents while open.
    pub popover: Option<PopoverView>,
}

/// Current value, handler and mounted popover of one mode.
#[derive(Debug, Clone, PartialEq)]
struct ModeSlot<V, P> {
    value: Option<V>,
    on_change: CallbackWith<V>,
    popover: Option<P>,
}

impl<V: Clone, P: Popover<Value = V>> ModeSlot<V, P> {
    fn new(value: Option<V>, on_change: CallbackWith<V>) -> Self {
        Self {
            value,
            on_change,
            popover: None,
        }
    }

    fn dispatch(&mut self, msg: PickerMsg) -> DispatchOutcome {
        let Some(popover) = self.popover.as_mut() else {
            return DispatchOutcome::Ignored;
        };
        let action = popover.update(msg);
        if let Some(value) = action.value() {
            self.value = Some(value.clone());
            self.on_change.call(value.clone());
        }
        if action.closes() {
            self.popover = None;
        }
        DispatchOutcome::from(&action)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ModeState {
    SingleDay {
        include_time: bool,
        slot: ModeSlot<String, SingleDayPopover>,
    },
    SingleMonth(ModeSlot<String, SingleMonthPopover>),
    DateRange(ModeSlot<RangeValue, DateRangePopover>),
    Full(ModeSlot<RangeValue, FullRangePopover>),
}

impl From<DatePickerMode> for ModeState {
    fn from(mode: DatePickerMode) -> Self {
        match mode {
            DatePickerMode::SingleDay {
                value,
                include_time,
                on_change,
            } => ModeState::SingleDay {
                include_time,
                slot: ModeSlot::new(value, on_change),
            },
            DatePickerMode::SingleMonth { value, on_change } => {
                ModeState::SingleMonth(ModeSlot::new(value, on_change))
            }
            DatePickerMode::DateRange { value, on_change } => {
                ModeState::DateRange(ModeSlot::new(value, on_change))
            }
            DatePickerMode::Full { value, on_change } => {
                ModeState::Full(ModeSlot::new(value, on_change))
            }
        }
    }
}

impl ModeState {
    fn kind(&self) -> ModeKind {
        match self {
            ModeState::SingleDay { .. } => ModeKind::SingleDay,
            ModeState::SingleMonth(_) => ModeKind::SingleMonth,
            ModeState::DateRange(_) => ModeKind::DateRange,
            ModeState::Full(_) => ModeKind::Full,
        }
    }

    fn mode(&self) -> DatePickerMode {
        match self {
            ModeState::SingleDay { include_time, slot } => DatePickerMode::SingleDay {
                value: slot.value.clone(),
                include_time: *include_time,
                on_change: slot.on_change.clone(),
            },
            ModeState::SingleMonth(slot) => DatePickerMode::SingleMonth {
                value: slot.value.clone(),
                on_change: slot.on_change.clone(),
            },
            ModeState::DateRange(slot) => DatePickerMode::DateRange {
                value: slot.value.clone(),
                on_change: slot.on_change.clone(),
            },
            ModeState::Full(slot) => DatePickerMode::Full {
                value: slot.value.clone(),
                on_change: slot.on_change.clone(),
            },
        }
    }

    fn is_open(&self) -> bool {
        match self {
            ModeState::SingleDay { slot, .. } => slot.popover.is_some(),
            ModeState::SingleMonth(slot) => slot.popover.is_some(),
            ModeState::DateRange(slot) => slot.popover.is_some(),
            ModeState::Full(slot) => slot.popover.is_some(),
        }
    }

    fn mount(&mut self, now: CalendarDate, locale: PickerLocale) {
        match self {
            ModeState::SingleDay { include_time, slot } => {
                let mut args = SingleDayArgs::default()
                    .include_time(*include_time)
                    .now(now)
                    .locale(locale);
                args.value = slot.value.clone();
                slot.popover = Some(SingleDayPopover::new(&args));
            }
            ModeState::SingleMonth(slot) => {
                let mut args = SingleMonthArgs::default().now(now).locale(locale);
                args.value = slot.value.clone();
                slot.popover = Some(SingleMonthPopover::new(&args));
            }
            ModeState::DateRange(slot) => {
                let mut args = DateRangeArgs::default().now(now).locale(locale);
                args.value = slot.value.clone();
                slot.popover = Some(DateRangePopover::new(&args));
            }
            ModeState::Full(slot) => {
                let mut args = FullRangeArgs::default().now(now).locale(locale);
                args.value = slot.value.clone();
                slot.popover = Some(FullRangePopover::new(&args));
            }
        }
    }

    fn unmount(&mut self) -> bool {
        match self {
            ModeState::SingleDay { slot, .. } => slot.popover.take().is_some(),
            ModeState::SingleMonth(slot) => slot.popover.take().is_some(),
            ModeState::DateRange(slot) => slot.popover.take().is_some(),
            ModeState::Full(slot) => slot.popover.take().is_some(),
        }
    }

    fn dispatch(&mut self, msg: PickerMsg) -> DispatchOutcome {
        match self {
            ModeState::SingleDay { slot, .. } => slot.dispatch(msg),
            ModeState::SingleMonth(slot) => slot.dispatch(msg),
            ModeState::DateRange(slot) => slot.dispatch(msg),
            ModeState::Full(slot) => slot.dispatch(msg),
        }
    }

    fn value_text(&self, locale: PickerLocale) -> Option<String> {
        match self {
            ModeState::SingleDay { include_time, slot } => {
                display::single_day_text(slot.value.as_deref(), *include_time)
            }
            ModeState::SingleMonth(slot) => {
                display::single_month_text(slot.value.as_deref(), locale)
            }
            ModeState::DateRange(slot) => display::date_range_text(slot.value.as_ref()),
            ModeState::Full(slot) => display::full_range_text(slot.value.as_ref()),
        }
    }

    fn popover_view(&self) -> Option<PopoverView> {
        match self {
            ModeState::SingleDay { slot, .. } => {
                slot.popover.as_ref().map(|p| PopoverView::SingleDay(p.view()))
            }
            ModeState::SingleMonth(slot) => {
                slot.popover.as_ref().map(|p| PopoverView::SingleMonth(p.view()))
            }
            ModeState::DateRange(slot) => {
                slot.popover.as_ref().map(|p| PopoverView::DateRange(p.view()))
            }
            ModeState::Full(slot) => slot.popover.as_ref().map(|p| PopoverView::Full(p.view())),
        }
    }
}

/// # DatePicker
///
/// A trigger showing the current value and, while open, exactly one mode
/// popover holding the provisional selection.
///
/// Values emitted by the popover become the picker's current value and are
/// passed to the mode's `on_change` once. Closing the popover drops every
/// provisional selection.
///
/// ## Examples
///
/// ```
/// use datepicker_components::{
///     CallbackWith, DatePicker, DatePickerArgs, DatePickerMode, PickerMsg,
/// };
/// use datepicker_foundation::CalendarDate;
///
/// let today = CalendarDate::new(2025, 3, 12).expect("valid date");
/// let mut picker = DatePicker::new(
///     DatePickerArgs::default()
///         .mode(DatePickerMode::SingleDay {
///             value: None,
///             include_time: false,
///             on_change: CallbackWith::default(),
///         })
///         .now(today),
/// );
/// assert!(picker.click_trigger());
/// picker.dispatch(PickerMsg::ClickDay(15));
/// assert!(!picker.is_open());
/// assert_eq!(picker.display_text(), "15/03/2025");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DatePicker {
    state: ModeState,
    label: Option<String>,
    placeholder: Option<String>,
    disabled: bool,
    width: WidthType,
    class_name: Option<String>,
    locale: PickerLocale,
    now: CalendarDate,
}

impl DatePicker {
    /// Builds a picker, opening it when `default_open` is set and it is enabled.
    pub fn new(args: DatePickerArgs) -> Self {
        let mut picker = Self {
            state: ModeState::from(args.mode),
            label: args.label,
            placeholder: args.placeholder,
            disabled: args.disabled,
            width: args.width,
            class_name: args.class_name,
            locale: args.locale,
            now: args.now,
        };
        if args.default_open {
            picker.open();
        }
        picker
    }

    /// Current mode with its latest value.
    pub fn mode(&self) -> DatePickerMode {
        self.state.mode()
    }

    /// Returns the mode without its value.
    pub fn kind(&self) -> ModeKind {
        self.state.kind()
    }

    /// Returns true while a popover is mounted.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Returns true when the picker ignores the trigger.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Handles a click on the trigger: opens when closed, dismisses when open.
    ///
    /// Returns whether the picker is open afterwards.
    pub fn click_trigger(&mut self) -> bool {
        if self.is_open() {
            self.dismiss();
        } else {
            self.open();
        }
        self.is_open()
    }

    /// Mounts a fresh popover seeded from the current value.
    ///
    /// Does nothing when disabled or already open.
    pub fn open(&mut self) -> bool {
        if self.disabled {
            debug!("{:?} picker is disabled, not opening", self.kind());
            return false;
        }
        if !self.is_open() {
            self.state.mount(self.now, self.locale);
            debug!("{:?} popover opened", self.kind());
        }
        true
    }

    /// Drops the popover and its provisional selection without emitting.
    pub fn dismiss(&mut self) {
        if self.state.unmount() {
            debug!("{:?} popover dismissed", self.kind());
        }
    }

    /// Passes one interaction to the mounted popover.
    pub fn dispatch(&mut self, msg: PickerMsg) -> DispatchOutcome {
        trace!("{:?} picker received {msg:?}", self.kind());
        let outcome = self.state.dispatch(msg);
        match outcome {
            DispatchOutcome::Committed | DispatchOutcome::Dismissed => {
                debug!("{:?} popover closed: {outcome:?}", self.kind());
            }
            _ => {}
        }
        outcome
    }

    /// Replaces the value of a single-day or single-month picker.
    ///
    /// Returns false, leaving the picker unchanged, in a range mode.
    pub fn set_single_value(&mut self, value: Option<String>) -> bool {
        let kind = self.kind();
        match &mut self.state {
            ModeState::SingleDay { slot, .. } => slot.value = value,
            ModeState::SingleMonth(slot) => slot.value = value,
            ModeState::DateRange(_) | ModeState::Full(_) => {
                warn!("single value ignored by a {kind:?} picker");
                return false;
            }
        }
        true
    }

    /// Replaces the value of a date-range or full-range picker.
    ///
    /// Returns false, leaving the picker unchanged, in a single-value mode.
    pub fn set_range_value(&mut self, value: Option<RangeValue>) -> bool {
        let kind = self.kind();
        match &mut self.state {
            ModeState::DateRange(slot) => slot.value = value,
            ModeState::Full(slot) => slot.value = value,
            ModeState::SingleDay { .. } | ModeState::SingleMonth(_) => {
                warn!("range value ignored by a {kind:?} picker");
                return false;
            }
        }
        true
    }

    /// Switches mode, closing any open popover.
    pub fn set_mode(&mut self, mode: DatePickerMode) {
        self.dismiss();
        self.state = ModeState::from(mode);
    }

    /// Enables or disables the picker; disabling closes it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.dismiss();
        }
    }

    /// Formatted current value, or the placeholder when unset or unreadable.
    pub fn display_text(&self) -> String {
        self.display().0
    }

    fn display(&self) -> (String, bool) {
        let text = self.state.value_text(self.locale);
        let is_placeholder = text.is_none();
        let text = display::or_placeholder(
            text,
            self.placeholder.as_deref(),
            self.state.kind(),
            self.locale,
        );
        (text, is_placeholder)
    }

    /// Describes the trigger and the mounted popover for drawing.
    pub fn view(&self) -> DatePickerView {
        let (text, is_placeholder) = self.display();
        DatePickerView {
            label: self.label.clone(),
            trigger: TriggerView {
                text,
                is_placeholder,
                disabled: self.disabled,
                is_open: self.is_open(),
                width: self.width,
                class_name: self.class_name.clone(),
            },
            popover: self.state.popover_view(),
        }
    }
}
