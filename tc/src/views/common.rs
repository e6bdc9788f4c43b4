//! Board-wide chrome: page header/footer, popup header/footer, jumpbox, message page

use crate::engine::Renderer;
use crate::rows::Rows;
use crate::view::View;

/// Main page header with breadcrumbs and the user link bar
pub struct OverallHeader;

impl View for OverallHeader {
    fn name(&self) -> &'static str {
        "overall_header"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.write("<!DOCTYPE html>\n<html dir=\"");
        r.var("S_CONTENT_DIRECTION");
        r.write("\" lang=\"");
        r.var("S_USER_LANG");
        r.write("\">\n<head>\n<meta charset=\"utf-8\" />\n<title>");
        r.var("SITENAME");
        r.write(" &bull; ");
        r.var("PAGE_TITLE");
        r.write("</title>\n<link href=\"");
        r.var("T_STYLESHEET_LINK");
        r.write("\" rel=\"stylesheet\" type=\"text/css\" media=\"screen\" />\n</head>\n<body id=\"phpbb\" class=\"section-");
        r.var("SCRIPT_NAME");
        r.write(" ");
        r.var("S_CONTENT_DIRECTION");
        r.write("\">\n<div id=\"wrap\">\n<div class=\"headerbar\">\n\t<h1><a href=\"");
        r.var("U_INDEX");
        r.write("\">");
        r.var("SITENAME");
        r.write("</a></h1>\n\t<p>");
        r.var("SITE_DESCRIPTION");
        r.write("</p>\n</div>\n<div class=\"navbar\">\n\t<ul class=\"linklist navlinks\">\n\t\t<li class=\"icon-home\"><a href=\"");
        r.var("U_INDEX");
        r.write("\" accesskey=\"h\">");
        r.var("L_INDEX");
        r.write("</a>");
        for (_, row) in r.rows("navlinks") {
            r.write(" <strong>&#8249;</strong> <a href=\"");
            r.field(row, "U_VIEW_FORUM");
            r.write("\">");
            r.field(row, "FORUM_NAME");
            r.write("</a>");
        }
        r.write("</li>\n\t</ul>\n\t<ul class=\"linklist rightside\">\n\t\t<li class=\"icon-faq\"><a href=\"");
        r.var("U_FAQ");
        r.write("\" title=\"");
        r.var("L_FAQ_EXPLAIN");
        r.write("\">");
        r.var("L_FAQ");
        r.write("</a></li>\n");
        if r.flag("S_USER_LOGGED_IN") {
            r.write("\t\t<li class=\"icon-ucp\"><a href=\"");
            r.var("U_PROFILE");
            r.write("\" title=\"");
            r.var("L_PROFILE");
            r.write("\">");
            r.var("L_PROFILE");
            r.write("</a></li>\n");
        }
        if r.flag("U_ACP") {
            r.write("\t\t<li class=\"icon-acp\"><a href=\"");
            r.var("U_ACP");
            r.write("\">");
            r.var("L_ACP");
            r.write("</a></li>\n");
        }
        r.write("\t\t<li class=\"icon-logout\"><a href=\"");
        r.var("U_LOGIN_LOGOUT");
        r.write("\">");
        r.var("L_LOGIN_LOGOUT");
        r.write("</a></li>\n\t</ul>\n</div>\n<div id=\"page-body\">\n");
        if r.flag("S_BOARD_DISABLED") && r.flag("S_USER_LOGGED_IN") {
            r.write("<div id=\"information\" class=\"rules\"><strong>");
            r.var("L_INFORMATION");
            r.write(":</strong> ");
            r.var("L_BOARD_DISABLED");
            r.write("</div>\n");
        }
    }
}

/// Main page footer with credit line and optional admin link
pub struct OverallFooter;

impl View for OverallFooter {
    fn name(&self) -> &'static str {
        "overall_footer"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.write("</div>\n<div id=\"page-footer\">\n\t<div class=\"navbar\">\n\t\t<ul class=\"linklist\">\n\t\t\t<li class=\"icon-home\"><a href=\"");
        r.var("U_INDEX");
        r.write("\">");
        r.var("L_INDEX");
        r.write("</a></li>\n\t\t\t<li class=\"rightside\">");
        r.var("S_TIMEZONE");
        r.write("</li>\n\t\t</ul>\n\t</div>\n\t<div class=\"copyright\">");
        r.var("L_POWERED_BY");
        if r.flag("TRANSLATION_INFO") {
            r.write("<br />");
            r.var("TRANSLATION_INFO");
        }
        if r.flag("DEBUG_OUTPUT") {
            r.write("<br />");
            r.var("DEBUG_OUTPUT");
        }
        if r.flag("U_ACP") {
            r.write("<br /><strong><a href=\"");
            r.var("U_ACP");
            r.write("\">");
            r.var("L_ACP");
            r.write("</a></strong>");
        }
        r.write("</div>\n</div>\n</div>\n</body>\n</html>\n");
    }
}

/// Header for popup windows
pub struct SimpleHeader;

impl View for SimpleHeader {
    fn name(&self) -> &'static str {
        "simple_header"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.write("<!DOCTYPE html>\n<html dir=\"");
        r.var("S_CONTENT_DIRECTION");
        r.write("\" lang=\"");
        r.var("S_USER_LANG");
        r.write("\">\n<head>\n<meta charset=\"utf-8\" />\n<title>");
        r.var("SITENAME");
        r.write(" &bull; ");
        r.var("PAGE_TITLE");
        r.write("</title>\n<link href=\"");
        r.var("T_STYLESHEET_LINK");
        r.write("\" rel=\"stylesheet\" type=\"text/css\" media=\"screen\" />\n</head>\n<body id=\"phpbb\" class=\"simple\">\n<div id=\"simple-wrap\">\n");
    }
}

/// Footer for popup windows
pub struct SimpleFooter;

impl View for SimpleFooter {
    fn name(&self) -> &'static str {
        "simple_footer"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.write("<div class=\"copyright\">");
        r.var("L_POWERED_BY");
        r.write("</div>\n</div>\n</body>\n</html>\n");
    }
}

/// Forum selection dropdown
///
/// Each `jumpbox_forums` row carries a nested `level` block; one indent is
/// written per level row.
pub struct Jumpbox;

impl View for Jumpbox {
    fn name(&self) -> &'static str {
        "jumpbox"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        if !r.flag("S_DISPLAY_JUMPBOX") {
            return;
        }
        r.write("<form method=\"post\" id=\"jumpbox\" action=\"");
        r.var("S_JUMPBOX_ACTION");
        r.write("\">\n<fieldset class=\"jumpbox\">\n\t<label for=\"f\" accesskey=\"j\">");
        r.var("L_JUMP_TO");
        r.write(":</label>\n\t<select name=\"f\" id=\"f\">\n");
        for (_, forum) in r.rows("jumpbox_forums") {
            if forum.flag("S_FORUM_COUNT") && forum.flag("S_IS_CAT") {
                r.write("\t\t<option value=\"-1\">------------------</option>\n");
            }
            r.write("\t\t<option value=\"");
            r.field(forum, "FORUM_ID");
            r.write("\"");
            if forum.flag("S_IS_CAT") {
                r.write(" disabled=\"disabled\" class=\"disabled-option\"");
            }
            if forum.flag("S_FORUM_SELECTED") {
                r.write(" selected=\"selected\"");
            }
            r.write(">");
            for _ in Rows::nested(forum, "level") {
                r.write("&nbsp; &nbsp;");
            }
            r.field(forum, "FORUM_NAME");
            r.write("</option>\n");
        }
        r.write("\t</select>\n\t<input type=\"submit\" value=\"");
        r.var("L_GO");
        r.write("\" class=\"button2\" />\n</fieldset>\n</form>\n");
    }
}

/// Generic information/error page
pub struct MessageBody;

impl View for MessageBody {
    fn name(&self) -> &'static str {
        "message_body"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        if r.flag("S_SIMPLE_MESSAGE") {
            r.include("simple_header");
        } else {
            r.include("overall_header");
        }
        r.write("<div class=\"panel\" id=\"message\">\n\t<div class=\"inner\">\n\t<h2 class=\"message-title\">");
        r.var("MESSAGE_TITLE");
        r.write("</h2>\n\t<p>");
        r.var("MESSAGE_TEXT");
        r.write("</p>\n");
        if r.flag("S_DISPLAY_JUMPBOX") {
            r.include("jumpbox");
        }
        r.write("\t</div>\n</div>\n");
        if r.flag("S_SIMPLE_MESSAGE") {
            r.include("simple_footer");
        } else {
            r.include("overall_footer");
        }
    }
}
