//! Printer-friendly topic view

use crate::engine::Renderer;
use crate::view::View;

/// Standalone page, no board chrome
pub struct ViewtopicPrint;

impl View for ViewtopicPrint {
    fn name(&self) -> &'static str {
        "viewtopic_print"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.write("<!DOCTYPE html>\n<html dir=\"");
        r.var("S_CONTENT_DIRECTION");
        r.write("\" lang=\"");
        r.var("S_USER_LANG");
        r.write("\">\n<head>\n<meta charset=\"utf-8\" />\n<meta name=\"robots\" content=\"noindex\" />\n<title>");
        r.var("SITENAME");
        r.write(" &bull; ");
        r.var("PAGE_TITLE");
        r.write("</title>\n<link href=\"");
        r.var("T_THEME_PATH");
        r.write("/print.css\" rel=\"stylesheet\" type=\"text/css\" />\n</head>\n<body id=\"phpbb\">\n<div id=\"wrap\">\n\t<a id=\"top\" accesskey=\"t\"></a>\n\n\t<div id=\"page-header\">\n\t\t<h1>");
        r.var("SITENAME");
        r.write("</h1>\n\t\t<p>");
        r.var("SITE_DESCRIPTION");
        r.write("<br /><a href=\"");
        r.var("U_FORUM");
        r.write("\">");
        r.var("U_FORUM");
        r.write("</a></p>\n\n\t\t<h2>");
        r.var("TOPIC_TITLE");
        r.write("</h2>\n\t\t<p><a href=\"");
        r.var("U_TOPIC");
        r.write("\">");
        r.var("U_TOPIC");
        r.write("</a></p>\n\t</div>\n\n\t<div id=\"page-body\">\n\t\t<div class=\"page-number\">");
        r.var("PAGE_NUMBER");
        r.write("</div>\n");

        for (cursor, post) in r.rows("postrow") {
            r.write("\t\t<div class=\"post\">\n\t\t\t<h3>");
            r.field(post, "POST_SUBJECT");
            r.write("</h3>\n\t\t\t<div class=\"date\">");
            r.var("L_POSTED");
            r.write(": <strong>");
            r.field(post, "POST_DATE");
            r.write("</strong></div>\n\t\t\t<div class=\"author\">");
            r.var("L_POST_BY_AUTHOR");
            r.write(" <strong>");
            r.field(post, "POST_AUTHOR");
            r.write("</strong></div>\n\t\t\t<div class=\"content\">");
            r.field(post, "MESSAGE");
            r.write("</div>\n\t\t</div>\n");
            if !cursor.is_last() {
                r.write("\t\t<hr />\n");
            }
        }

        r.write("\t</div>\n\n\t<div id=\"page-footer\">\n\t\t<div class=\"page-number\">");
        r.var("S_TIMEZONE");
        r.write("<br />");
        r.var("PAGE_NUMBER");
        r.write("</div>\n\t\t<div class=\"copyright\">");
        r.var("L_POWERED_BY");
        r.write("</div>\n\t</div>\n</div>\n</body>\n</html>\n");
    }
}
