//! User control panel frame and front page

use crate::engine::Renderer;
use crate::rows::Rows;
use crate::view::View;

/// Panel frame: page header, module tabs and the side navigation
pub struct UcpHeader;

impl View for UcpHeader {
    fn name(&self) -> &'static str {
        "ucp_header"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.include("overall_header");
        r.write("<h2>");
        r.var("L_TITLE");
        r.write("</h2>\n\n<div id=\"tabs\">\n\t<ul>\n");
        for (_, tab) in r.rows("t_block1") {
            r.write("\t\t<li");
            if tab.flag("S_SELECTED") {
                r.write(" class=\"activetab\"");
            }
            r.write("><a href=\"");
            r.field(tab, "U_TITLE");
            r.write("\"><span>");
            r.field(tab, "L_TITLE");
            r.write("</span></a></li>\n");
        }
        r.write("\t</ul>\n</div>\n\n<div class=\"panel bg3\">\n\t<div class=\"inner\">\n\t<div style=\"width: 100%;\">\n\t<div id=\"cp-menu\">\n\t\t<div id=\"navigation\">\n\t\t\t<ul>\n");
        for (_, section) in r.rows("l_block1") {
            r.write("\t\t\t\t<li");
            if section.flag("S_SELECTED") {
                r.write(" id=\"active-subsection\"");
            }
            r.write("><a href=\"");
            r.field(section, "U_TITLE");
            r.write("\"><span>");
            r.field(section, "L_TITLE");
            r.write("</span></a>");
            if section.flag("S_SELECTED") && !section.rows("l_block2").is_empty() {
                r.write("\n\t\t\t\t\t<ul>\n");
                for (_, link) in Rows::nested(section, "l_block2") {
                    r.write("\t\t\t\t\t\t<li");
                    if link.flag("S_SELECTED") {
                        r.write(" class=\"active\"");
                    }
                    r.write("><a href=\"");
                    r.field(link, "U_TITLE");
                    r.write("\">");
                    r.field(link, "L_TITLE");
                    r.write("</a></li>\n");
                }
                r.write("\t\t\t\t\t</ul>\n\t\t\t\t");
            }
            r.write("</li>\n");
        }
        r.write("\t\t\t</ul>\n\t\t</div>\n\t</div>\n\n\t<div id=\"cp-main\" class=\"ucp-main\">\n");
    }
}

/// Closes the panel frame opened by `ucp_header`
pub struct UcpFooter;

impl View for UcpFooter {
    fn name(&self) -> &'static str {
        "ucp_footer"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.write("\t</div>\n\t<div class=\"clear\"></div>\n\t</div>\n\t</div>\n</div>\n");
        r.include("jumpbox");
        r.include("overall_footer");
    }
}

/// Front page: welcome, important topics and the user's statistics
pub struct UcpMain;

impl View for UcpMain {
    fn name(&self) -> &'static str {
        "ucp_main"
    }

    fn render(&self, r: &mut Renderer<'_>) {
        r.include("ucp_header");
        r.write("<h2>");
        r.var("L_TITLE");
        r.write("</h2>\n\n<div class=\"panel\">\n\t<div class=\"inner\">\n\t<p>");
        r.var("L_UCP_WELCOME");
        r.write("</p>\n");

        let topics = r.rows("topicrow");
        if topics.is_empty() {
            r.write("\t<p><strong>");
            r.var("L_NO_IMPORTANT_NEWS");
            r.write("</strong></p>\n");
        } else {
            r.write("\t<h3>");
            r.var("L_IMPORTANT_NEWS");
            r.write("</h3>\n\t<ul class=\"topiclist cplist\">\n");
            for (cursor, topic) in topics {
                r.write("\t\t<li class=\"row ");
                r.write(cursor.bg_class());
                r.write("\">\n\t\t\t<dl>\n\t\t\t\t<dt><a href=\"");
                r.field(topic, "U_VIEW_TOPIC");
                r.write("\" class=\"topictitle\">");
                r.field(topic, "TOPIC_TITLE");
                r.write("</a><br />");
                r.var("L_POST_BY_AUTHOR");
                r.write(" ");
                r.field(topic, "TOPIC_AUTHOR_FULL");
                r.write(" &raquo; ");
                r.field(topic, "FIRST_POST_TIME");
                r.write("</dt>\n\t\t\t</dl>\n\t\t</li>\n");
            }
            r.write("\t</ul>\n");
        }

        r.write("\n\t<h3>");
        r.var("L_YOUR_DETAILS");
        r.write("</h3>\n\t<dl class=\"details\">\n\t\t<dt>");
        r.var("L_JOINED");
        r.write(":</dt> <dd>");
        r.var("JOINED");
        r.write("</dd>\n\t\t<dt>");
        r.var("L_VISITED");
        r.write(":</dt> <dd>");
        r.var("LAST_VISIT_TIME");
        r.write("</dd>\n\t\t<dt>");
        r.var("L_TOTAL_POSTS");
        r.write(":</dt> <dd>");
        r.var("POSTS");
        if r.flag("POSTS_PCT") {
            r.write("<br />[");
            r.var("POSTS_PCT");
            r.write("]");
        }
        r.write("</dd>\n");
        if r.flag("ACTIVE_FORUM") {
            r.write("\t\t<dt>");
            r.var("L_ACTIVE_IN_FORUM");
            r.write(":</dt> <dd><strong><a href=\"");
            r.var("U_ACTIVE_FORUM");
            r.write("\">");
            r.var("ACTIVE_FORUM");
            r.write("</a></strong></dd>\n");
        }
        r.write("\t</dl>\n\t</div>\n</div>\n");
        r.include("ucp_footer");
    }
}
