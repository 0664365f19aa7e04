use mediconnect_core::content::PROMPT_IDEAS;
use mediconnect_core::ChatSession;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Chat,
    Prompts,
    Input,
}

impl FocusPane {
    pub fn next(self) -> Self {
        match self {
            FocusPane::Input => FocusPane::Chat,
            FocusPane::Chat => FocusPane::Prompts,
            FocusPane::Prompts => FocusPane::Input,
        }
    }
}

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub focus: FocusPane,

    // Conversation; the draft lives in here too
    pub session: ChatSession,
    pub cursor: usize,

    // Chat scroll state
    pub chat_scroll: u16,
    pub chat_height: u16,
    pub chat_width: u16,

    pub prompt_state: ListState,

    // Panel areas for mouse hit-testing (updated during render)
    pub chat_area: Option<Rect>,
    pub prompts_area: Option<Rect>,
}

impl App {
    pub fn new(session: ChatSession) -> Self {
        let mut prompt_state = ListState::default();
        prompt_state.select(Some(0));

        Self {
            should_quit: false,
            input_mode: InputMode::Editing,
            focus: FocusPane::Input,

            session,
            cursor: 0,

            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,

            prompt_state,

            chat_area: None,
            prompts_area: None,
        }
    }

    fn edit_draft(&mut self, edit: impl FnOnce(&mut String, &mut usize)) {
        let mut draft = self.session.draft().to_string();
        let mut cursor = self.cursor;
        edit(&mut draft, &mut cursor);
        self.session.set_draft(draft);
        self.cursor = cursor;
    }

    fn draft_len(&self) -> usize {
        self.session.draft().chars().count()
    }

    // Draft editing
    pub fn insert_char(&mut self, c: char) {
        self.edit_draft(|draft, cursor| {
            let byte_pos = char_to_byte_index(draft, *cursor);
            draft.insert(byte_pos, c);
            *cursor += 1;
        });
    }

    pub fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.edit_draft(|draft, cursor| {
            *cursor -= 1;
            let byte_pos = char_to_byte_index(draft, *cursor);
            draft.remove(byte_pos);
        });
    }

    pub fn delete_forward(&mut self) {
        if self.cursor >= self.draft_len() {
            return;
        }
        self.edit_draft(|draft, cursor| {
            let byte_pos = char_to_byte_index(draft, *cursor);
            draft.remove(byte_pos);
        });
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.draft_len());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.draft_len();
    }

    /// Send the draft. Blank drafts are left as they are.
    pub fn submit(&mut self) {
        if self.session.submit_draft().is_some() {
            self.cursor = 0;
            tracing::debug!(turns = self.session.turns(), "Submitted query");
            self.scroll_chat_to_bottom();
        }
    }

    /// Pre-fill the draft with the selected prompt idea without sending it
    pub fn use_selected_prompt(&mut self) {
        if let Some(idea) = self.prompt_state.selected().and_then(|i| PROMPT_IDEAS.get(i)) {
            self.session.set_draft(*idea);
            self.cursor = self.draft_len();
            self.focus = FocusPane::Input;
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn prompt_nav_down(&mut self) {
        let i = self.prompt_state.selected().unwrap_or(0);
        self.prompt_state.select(Some((i + 1).min(PROMPT_IDEAS.len() - 1)));
    }

    pub fn prompt_nav_up(&mut self) {
        let i = self.prompt_state.selected().unwrap_or(0);
        self.prompt_state.select(Some(i.saturating_sub(1)));
    }

    pub fn scroll_down(&mut self) {
        self.scroll_by(1);
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_half_page_down(&mut self) {
        self.scroll_by(self.visible_height() / 2);
    }

    pub fn scroll_half_page_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(self.visible_height() / 2);
    }

    /// Scroll chat so the latest reply is visible
    pub fn scroll_chat_to_bottom(&mut self) {
        self.chat_scroll = self.max_scroll();
    }

    fn scroll_by(&mut self, rows: u16) {
        self.chat_scroll = self.chat_scroll.saturating_add(rows).min(self.max_scroll());
    }

    /// Paragraph scroll offsets are u16, so very long logs pin at u16::MAX
    fn max_scroll(&self) -> u16 {
        let hidden = self.chat_line_count().saturating_sub(self.visible_height() as usize);
        hidden.min(u16::MAX as usize) as u16
    }

    fn visible_height(&self) -> u16 {
        if self.chat_height > 0 {
            self.chat_height
        } else {
            20
        }
    }

    /// Rendered height of the chat log after word wrapping
    fn chat_line_count(&self) -> usize {
        // Use actual chat width, default to 50 before the first draw
        let wrap_width = if self.chat_width > 0 { self.chat_width } else { 50 };
        ui::chat_paragraph(&self.session).line_count(wrap_width)
    }
}
