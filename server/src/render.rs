use actix_web::HttpRequest;

use db::models::Question;
use errors::Error;

pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        content
    )
}

fn detail_path(req: &HttpRequest, question: &Question) -> Result<String, Error> {
    req.url_for("polls_detail", &[question.id.to_string()])
        .map(|url| url.path().to_string())
        .map_err(|err| {
            error!("Could not build detail url - {}", err);
            Error::InternalServerError("Could not build detail url".into())
        })
}

pub fn index(req: &HttpRequest, latest_question_list: &[Question]) -> Result<String, Error> {
    if latest_question_list.is_empty() {
        return Ok(page("Polls", &format!("<p>{}</p>\n", NO_POLLS_MESSAGE)));
    }

    let mut content = String::from("<ul>\n");
    for question in latest_question_list {
        content.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            detail_path(req, question)?,
            escape(&question.question_text)
        ));
    }
    content.push_str("</ul>\n");

    Ok(page("Polls", &content))
}

pub fn detail(req: &HttpRequest, question: &Question) -> Result<String, Error> {
    let index_path = req
        .url_for_static("polls_index")
        .map(|url| url.path().to_string())
        .map_err(|err| {
            error!("Could not build index url - {}", err);
            Error::InternalServerError("Could not build index url".into())
        })?;

    let content = format!(
        "<h1>{}</h1>\n<p>Published {}</p>\n<a href=\"{}\">All polls</a>\n",
        escape(&question.question_text),
        question.pub_date.format("%B %-d, %Y, %H:%M"),
        index_path
    );

    Ok(page(&question.question_text, &content))
}
