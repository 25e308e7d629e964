//! Window state and iced application
//!
//! The window owns a [`Document`]. Inputs write into it, the two buttons run
//! the flows' dispatch step as background tasks, and results are rendered into
//! the document when their message arrives. Nothing serializes the flows: a
//! second request may be sent while the first is in flight, and whichever
//! completes last owns the container.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Background, Border, Element, Length, Task, Theme};

use crate::backend::api::{NewsApi, NewsClient};
use crate::backend::types::{ChatAnswer, SummaryRecord};
use crate::config::Config;
use crate::flows;
use crate::ui::{field, theme::DarkTheme};
use crate::view::markup::RenderOptions;
use crate::view::{text as markup_text, Document, ElementId};

/// Wrap width for container text
const TEXT_WIDTH: usize = 100;

pub struct NewsDesk {
    document: Document,
    client: NewsClient,
    render: RenderOptions,
    in_flight: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(ElementId, String),
    FetchSummaries,
    AskQuestion,
    SummariesLoaded(Result<Vec<SummaryRecord>, String>),
    AnswerLoaded(Result<ChatAnswer, String>),
}

impl NewsDesk {
    pub fn new(config: &Config) -> Self {
        Self {
            document: Document::new(),
            client: NewsClient::new(&config.backend_url),
            render: config.render_options(),
            in_flight: 0,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(id, value) => {
                self.document.set_value(id, value);
                Task::none()
            }

            Message::FetchSummaries => {
                let sources = flows::collect_sources(&self.document);
                let client = self.client.clone();
                self.in_flight += 1;
                Task::perform(
                    async move {
                        client
                            .summarize_news(&sources)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::SummariesLoaded,
                )
            }

            Message::AskQuestion => {
                let query = flows::collect_chat_query(&self.document);
                let client = self.client.clone();
                self.in_flight += 1;
                Task::perform(
                    async move { client.chat_with_news(&query).await.map_err(|e| e.to_string()) },
                    Message::AnswerLoaded,
                )
            }

            Message::SummariesLoaded(result) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                match result {
                    Ok(records) => {
                        flows::render_summaries(&mut self.document, &records, self.render);
                        tracing::info!("Rendered {} summaries", records.len());
                    }
                    Err(e) => tracing::error!("Summary request failed: {}", e),
                }
                Task::none()
            }

            Message::AnswerLoaded(result) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                match result {
                    Ok(answer) => {
                        flows::render_answer(&mut self.document, &answer, self.render);
                        tracing::info!("Rendered chat answer");
                    }
                    Err(e) => tracing::error!("Chat request failed: {}", e),
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let doc = &self.document;

        let summary_form = row![
            container(field::input(
                "Sources",
                "bbc, reuters, ...",
                doc.value_ref(ElementId::Sources),
                |v| Message::InputChanged(ElementId::Sources, v),
                Message::FetchSummaries,
            ))
            .width(Length::Fill),
            button(text("Summarize")).on_press(Message::FetchSummaries).padding(10),
        ]
        .spacing(8)
        .align_y(iced::Alignment::End);

        let chat_form = column![
            field::input(
                "Article",
                "Paste the article text",
                doc.value_ref(ElementId::Article),
                |v| Message::InputChanged(ElementId::Article, v),
                Message::AskQuestion,
            ),
            row![
                container(field::input(
                    "Question",
                    "What would you like to know?",
                    doc.value_ref(ElementId::Question),
                    |v| Message::InputChanged(ElementId::Question, v),
                    Message::AskQuestion,
                ))
                .width(Length::Fill),
                button(text("Ask")).on_press(Message::AskQuestion).padding(10),
            ]
            .spacing(8)
            .align_y(iced::Alignment::End),
        ]
        .spacing(8);

        let status = if self.in_flight > 0 {
            format!("Waiting for backend ({} pending)...", self.in_flight)
        } else {
            format!("Backend: {}", self.client.base_url())
        };

        let content = column![
            summary_form,
            field::output(
                markup_text::to_text(doc.markup(ElementId::Summaries), TEXT_WIDTH),
                "Summaries appear here.",
            ),
            Space::with_height(8),
            chat_form,
            field::output(
                markup_text::to_text(doc.markup(ElementId::ChatResponse), TEXT_WIDTH),
                "The answer appears here.",
            ),
            text(status).size(12).color(DarkTheme::TEXT_MUTED),
        ]
        .spacing(12);

        container(content)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::BACKGROUND)),
                border: Border {
                    color: DarkTheme::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
